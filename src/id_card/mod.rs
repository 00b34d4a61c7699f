mod region;

pub use region::{is_known_region, region_name};

use crate::outcome::{InvalidReason, ValidationOutcome};
use crate::secondary_validation::{ChineseIdChecksum, Validator};
use lazy_static::lazy_static;
use regex::Regex;

const ID_LENGTH: usize = 18;
const REGION_CODE_LENGTH: usize = 2;

lazy_static! {
    // 6 digit administrative code, birth date, 3 digit sequence and, for the 18 character
    // form, a century and a trailing check character.
    static ref STRICT_ID_REGEX: Regex = Regex::new(concat!(
        r"^[0-9]{6}(?:",
        r"(?:18|19|20)[0-9]{2}(?:0[1-9]|1[012])(?:0[1-9]|[12][0-9]|3[01])[0-9]{3}[0-9Xx]",
        r"|",
        r"[0-9]{2}(?:0[1-9]|1[012])(?:0[1-9]|[12][0-9]|3[01])[0-9]{3}",
        r")$"
    ))
    .unwrap();
    static ref EASY_ID_REGEX: Regex = Regex::new(r"^(?:[0-9]{15}|[0-9]{17}[0-9Xx])$").unwrap();
}

/// Strict identity card check: format, region code and, for 18 character numbers, the
/// MOD 11-2 check character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityValidator {
    /// An empty value is accepted as "not provided".
    pub allow_empty: bool,
}

impl IdentityValidator {
    pub fn new(allow_empty: bool) -> Self {
        Self { allow_empty }
    }

    pub fn validate(&self, value: Option<&str>) -> ValidationOutcome {
        validate(value, self.allow_empty)
    }
}

impl Validator for IdentityValidator {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.validate(Some(candidate)).is_valid()
    }
}

/// Validates `value` as an 18 character (or 15 character legacy) identity card number.
///
/// Checks run in order and the first failure is reported: emptiness, format, region code,
/// then the check character (18 character numbers only).
pub fn validate(value: Option<&str>, allow_empty: bool) -> ValidationOutcome {
    check_strict(value, allow_empty).into()
}

fn check_strict(value: Option<&str>, allow_empty: bool) -> Result<(), InvalidReason> {
    let Some(value) = non_empty(value, allow_empty)? else {
        return Ok(());
    };

    if !STRICT_ID_REGEX.is_match(value) {
        return Err(InvalidReason::FormatError);
    }

    // The format check guarantees an ASCII prefix.
    if !is_known_region(&value[..REGION_CODE_LENGTH]) {
        return Err(InvalidReason::RegionError);
    }

    // Legacy numbers have no check character.
    if value.len() == ID_LENGTH && !ChineseIdChecksum.is_valid_match(value) {
        return Err(InvalidReason::ChecksumError);
    }

    Ok(())
}

/// Loose identity card check: 15 digits, or 17 digits followed by a digit or `X`.
/// Neither the region nor the check character is verified.
pub fn validate_easy(value: Option<&str>, allow_empty: bool) -> ValidationOutcome {
    let result = non_empty(value, allow_empty).and_then(|value| match value {
        Some(value) if !EASY_ID_REGEX.is_match(value) => Err(InvalidReason::FormatError),
        _ => Ok(()),
    });
    result.into()
}

/// `Ok(None)` when the value is empty and that is allowed.
fn non_empty(value: Option<&str>, allow_empty: bool) -> Result<Option<&str>, InvalidReason> {
    match value {
        Some(value) if !value.is_empty() => Ok(Some(value)),
        _ if allow_empty => Ok(None),
        _ => Err(InvalidReason::EmptyInput),
    }
}
