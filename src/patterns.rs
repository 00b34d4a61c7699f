use crate::error::FieldError;
use lazy_static::lazy_static;
use regex::Regex;

// The patterns use explicit ASCII classes: `\d` and `\w` are Unicode-aware in `regex`.
lazy_static! {
    /// Landline with area code (`0xx-xxxxxxx`) or an 11 digit mobile number.
    static ref PHONE_REGEX: Regex =
        Regex::new(r"^(?:0[0-9]{2,3}-[0-9]{7,8}|1[3-9][0-9]{9})$").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9_]+(?:[.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+(?:[.-]?[A-Za-z0-9_]+)*(?:\.[A-Za-z0-9_]{2,3})+$"
    )
    .unwrap();
    /// At most 8 integer digits and 5 decimals.
    static ref DECIMAL_REGEX: Regex =
        Regex::new(r"^-?[1-9][0-9]{0,7}(?:\.[0-9]{1,5})?$|^0(?:\.[0-9]{1,5})?$").unwrap();
    static ref NON_NEGATIVE_INTEGER_REGEX: Regex = Regex::new(r"^(?:0|[1-9][0-9]*)$").unwrap();
    // Any character but a line terminator.
    static ref PASSWORD_REGEX: Regex =
        Regex::new(r"^[^\n\r\x{2028}\x{2029}]{6,20}$").unwrap();
    static ref PHONE_CODE_REGEX: Regex = Regex::new(r"^[0-9]{6}$").unwrap();
    static ref IMAGE_CODE_REGEX: Regex = Regex::new(r"^[^\n\r\x{2028}\x{2029}]{4}$").unwrap();
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Parses a number the way a browser form would: surrounding whitespace is ignored and a
/// blank value counts as zero.
///
/// Accepts decimals with an optional sign and exponent, `Infinity` (case-sensitive, with an
/// optional sign) and unsigned `0x`, `0o` and `0b` integers.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(number) = parse_radix_integer(trimmed) {
        return number;
    }
    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }
    // Keeps out the `inf` and `nan` spellings `f64::from_str` also accepts.
    if unsigned.starts_with(|c: char| c == '+' || c == '-')
        || !unsigned
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    unsigned.parse::<f64>().ok().map(|number| sign * number)
}

/// `None` when `value` has no radix prefix, `Some(None)` when the digits are invalid.
fn parse_radix_integer(value: &str) -> Option<Option<f64>> {
    let radix = match value.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &value[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0, |number: f64, c| {
        Some(number * f64::from(radix) + f64::from(c.to_digit(radix)?))
    }))
}

pub fn validate_phone(value: Option<&str>) -> Result<(), FieldError> {
    let value = present(value).ok_or(FieldError::MissingPhone)?;
    if !PHONE_REGEX.is_match(value) {
        return Err(FieldError::InvalidPhone);
    }
    Ok(())
}

pub fn validate_email(value: Option<&str>) -> Result<(), FieldError> {
    let value = present(value).ok_or(FieldError::MissingEmail)?;
    if !EMAIL_REGEX.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// A decimal number with at most 8 integer digits and 5 decimals.
pub fn validate_number(value: Option<&str>, allow_empty: bool) -> Result<(), FieldError> {
    let Some(value) = present(value) else {
        return if allow_empty {
            Ok(())
        } else {
            Err(FieldError::MissingNumber)
        };
    };
    if parse_number(value).is_none() || !DECIMAL_REGEX.is_match(value) {
        return Err(FieldError::InvalidNumber);
    }
    Ok(())
}

/// `0` or a positive integer without leading zeros.
pub fn validate_positive_number(
    value: Option<&str>,
    allow_empty: bool,
) -> Result<(), FieldError> {
    let Some(value) = present(value) else {
        return if allow_empty {
            Ok(())
        } else {
            Err(FieldError::MissingNumber)
        };
    };
    if parse_number(value).is_none() {
        return Err(FieldError::InvalidNumber);
    }
    if !NON_NEGATIVE_INTEGER_REGEX.is_match(value) {
        return Err(FieldError::NotNonNegativeInteger);
    }
    Ok(())
}

/// Rejects negative numbers and numbers below `min`, then applies [validate_number].
pub fn validate_number_by_min(value: Option<&str>, min: f64) -> Result<(), FieldError> {
    if let Some(number) = parse_number(value.unwrap_or_default()) {
        if number < 0.0 {
            return Err(FieldError::Negative);
        }
        if number < min {
            return Err(FieldError::BelowMinimum { min });
        }
    }
    validate_number(value, false)
}

/// Rejects negative numbers and numbers above `max`, then applies [validate_number].
/// `tip` replaces the default "too large" message.
pub fn validate_number_by_max(
    value: Option<&str>,
    max: f64,
    tip: Option<&str>,
) -> Result<(), FieldError> {
    if let Some(number) = parse_number(value.unwrap_or_default()) {
        if number < 0.0 {
            return Err(FieldError::Negative);
        }
        if number > max {
            return Err(FieldError::AboveMaximum {
                max,
                tip: tip.map(str::to_string),
            });
        }
    }
    validate_number(value, false)
}

fn validate_format(
    value: Option<&str>,
    regex: &Regex,
    field: &'static str,
) -> Result<(), FieldError> {
    if regex.is_match(value.unwrap_or_default()) {
        Ok(())
    } else {
        Err(FieldError::InvalidFormat { field })
    }
}

/// 6 to 20 characters.
pub fn validate_password(value: Option<&str>) -> Result<(), FieldError> {
    validate_format(value, &PASSWORD_REGEX, "password")
}

/// 6 digit verification code.
pub fn validate_phone_code(value: Option<&str>) -> Result<(), FieldError> {
    validate_format(value, &PHONE_CODE_REGEX, "verification code")
}

/// 4 character captcha.
pub fn validate_image_code(value: Option<&str>) -> Result<(), FieldError> {
    validate_format(value, &IMAGE_CODE_REGEX, "captcha")
}
