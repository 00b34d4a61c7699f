use afl::fuzz;
use form_rules::{validate, ChineseIdChecksum, InvalidReason, ValidationOutcome, Validator};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

/// The first byte selects `allow_empty`, the rest is the candidate identifier.
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (flag, input) = bytes.split_first()?;
    let input = std::str::from_utf8(input).ok()?;
    run_fuzz(input, flag & 1 == 1);
    Some(())
}

fn run_fuzz(input: &str, allow_empty: bool) {
    let outcome = validate(Some(input), allow_empty);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Allow empty: {:?}", allow_empty);
        println!("Outcome: {:?}", outcome);
    }

    // Same input, same outcome.
    assert_eq!(outcome, validate(Some(input), allow_empty));

    match outcome {
        ValidationOutcome::Valid => {
            assert!((input.is_empty() && allow_empty) || input.len() == 15 || input.len() == 18);
            if input.len() == 18 {
                assert!(ChineseIdChecksum.is_valid_match(input));
            }
        }
        ValidationOutcome::Invalid(InvalidReason::EmptyInput) => {
            assert!(input.is_empty() && !allow_empty);
        }
        ValidationOutcome::Invalid(InvalidReason::ChecksumError) => {
            assert_eq!(input.len(), 18);
            assert!(!ChineseIdChecksum.is_valid_match(input));
        }
        ValidationOutcome::Invalid(_) => {}
    }
}
