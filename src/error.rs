use std::convert::From;

use strum::IntoStaticStr;
use thiserror::Error;

use crate::outcome::InvalidReason;

/// A field value rejected by one of the form rules. The `Display` output is the message
/// meant for the end user.
#[derive(Debug, Clone, PartialEq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FieldError {
    #[error("Please enter a phone number")]
    MissingPhone,

    #[error("The phone number is not well formed")]
    InvalidPhone,

    #[error("Please enter an email address")]
    MissingEmail,

    #[error("The email address is not well formed")]
    InvalidEmail,

    #[error("Please enter a number")]
    MissingNumber,

    #[error("The number is not well formed")]
    InvalidNumber,

    #[error("Please enter a non-negative integer")]
    NotNonNegativeInteger,

    #[error("Negative numbers are not allowed")]
    Negative,

    #[error("Please enter a number not less than {min}")]
    BelowMinimum { min: f64 },

    /// `tip` replaces the default message when set.
    #[error("{}", above_maximum_message(.max, .tip))]
    AboveMaximum { max: f64, tip: Option<String> },

    #[error("The {field} is not well formed")]
    InvalidFormat { field: &'static str },

    #[error(transparent)]
    IdCard(#[from] InvalidReason),
}

fn above_maximum_message(max: &f64, tip: &Option<String>) -> String {
    match tip {
        Some(tip) if !tip.is_empty() => tip.to_string(),
        _ => format!("Please enter a number not greater than {max}"),
    }
}

impl FieldError {
    /// Stable snake_case code, used as a metric label.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::IdCard(reason) => reason.code(),
            other => other.into(),
        }
    }
}

impl From<FieldError> for i64 {
    fn from(value: FieldError) -> i64 {
        match value {
            FieldError::MissingPhone
            | FieldError::MissingEmail
            | FieldError::MissingNumber
            | FieldError::IdCard(InvalidReason::EmptyInput) => -1,
            FieldError::InvalidPhone
            | FieldError::InvalidEmail
            | FieldError::InvalidNumber
            | FieldError::InvalidFormat { .. }
            | FieldError::IdCard(InvalidReason::FormatError) => -2,
            FieldError::IdCard(InvalidReason::RegionError) => -3,
            FieldError::IdCard(InvalidReason::ChecksumError) => -4,
            FieldError::NotNonNegativeInteger => -5,
            FieldError::Negative
            | FieldError::BelowMinimum { .. }
            | FieldError::AboveMaximum { .. } => -6,
        }
    }
}
