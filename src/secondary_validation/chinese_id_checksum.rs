use crate::secondary_validation::{leading_digits, Validator};

pub struct ChineseIdChecksum;

const CHINESE_ID_LENGTH: usize = 18;

/// Positional weights of the first 17 digits.
pub const WEIGHT_FACTORS: [u32; CHINESE_ID_LENGTH - 1] =
    [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Expected 18th character, indexed by the weighted sum modulo 11.
pub const PARITY_MAP: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

impl ChineseIdChecksum {
    /// Computes the check character for the first 17 characters of `candidate`.
    ///
    /// Returns `None` if the input has fewer than 17 characters or one of them is not a digit.
    pub fn checksum_char(candidate: &str) -> Option<char> {
        let digits = leading_digits(candidate, CHINESE_ID_LENGTH - 1)?;
        let sum: u32 = digits
            .iter()
            .zip(WEIGHT_FACTORS.iter())
            .map(|(digit, weight)| digit * weight)
            .sum();
        Some(PARITY_MAP[(sum % 11) as usize])
    }
}

impl Validator for ChineseIdChecksum {
    // https://en.wikipedia.org/wiki/Resident_Identity_Card
    //  Last digit checksum cf ISO 7064:1983, MOD 11-2.
    fn is_valid_match(&self, candidate: &str) -> bool {
        if candidate.len() != CHINESE_ID_LENGTH {
            return false;
        }
        let Some(expected) = Self::checksum_char(candidate) else {
            return false;
        };
        candidate
            .chars()
            .next_back()
            .is_some_and(|last| last.to_ascii_uppercase() == expected)
    }
}
