mod chinese_id_checksum;

pub use crate::secondary_validation::chinese_id_checksum::{
    ChineseIdChecksum, PARITY_MAP, WEIGHT_FACTORS,
};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Collects the first `count` characters of `input` as digit values.
/// Returns `None` if one of them is not an ASCII digit or if the input is too short.
fn leading_digits(input: &str, count: usize) -> Option<Vec<u32>> {
    let mut digits = Vec::with_capacity(count);
    for c in input.chars().take(count) {
        digits.push(c.to_digit(10)?);
    }
    if digits.len() == count {
        Some(digits)
    } else {
        None
    }
}
