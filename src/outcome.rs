use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

/// Why an identifier was rejected.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Error, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum InvalidReason {
    #[error("An identity card number is required")]
    EmptyInput,

    #[error("The identity card number is not well formed")]
    FormatError,

    #[error("The identity card number has an unknown region code")]
    RegionError,

    #[error("The identity card number has a wrong check character")]
    ChecksumError,
}

impl InvalidReason {
    /// Stable snake_case code, used as a metric label.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

/// Result of validating a single value. Produced fresh by every call.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(into = "OutcomeReport")]
pub enum ValidationOutcome {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<(), InvalidReason> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<(), InvalidReason>> for ValidationOutcome {
    fn from(result: Result<(), InvalidReason>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::Valid,
            Err(reason) => ValidationOutcome::Invalid(reason),
        }
    }
}

// Wire shape: `{ "ok": bool, "reason"?: ... }`
#[derive(Serialize)]
#[serde(rename = "ValidationOutcome")]
struct OutcomeReport {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<InvalidReason>,
}

impl From<ValidationOutcome> for OutcomeReport {
    fn from(outcome: ValidationOutcome) -> Self {
        OutcomeReport {
            ok: outcome.is_valid(),
            reason: outcome.reason(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_ser_tokens, Token};

    #[test]
    fn valid_outcome_serializes_without_reason() {
        assert_ser_tokens(
            &ValidationOutcome::Valid,
            &[
                Token::Struct {
                    name: "ValidationOutcome",
                    len: 1,
                },
                Token::Str("ok"),
                Token::Bool(true),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn invalid_outcome_serializes_reason() {
        assert_ser_tokens(
            &ValidationOutcome::Invalid(InvalidReason::RegionError),
            &[
                Token::Struct {
                    name: "ValidationOutcome",
                    len: 2,
                },
                Token::Str("ok"),
                Token::Bool(false),
                Token::Str("reason"),
                Token::Some,
                Token::UnitVariant {
                    name: "InvalidReason",
                    variant: "RegionError",
                },
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn outcome_as_json() {
        assert_eq!(
            serde_json::to_string(&ValidationOutcome::Invalid(InvalidReason::ChecksumError))
                .unwrap(),
            r#"{"ok":false,"reason":"ChecksumError"}"#
        );
        assert_eq!(
            serde_json::to_string(&ValidationOutcome::Valid).unwrap(),
            r#"{"ok":true}"#
        );
    }

    #[test]
    fn reason_codes() {
        assert_eq!(InvalidReason::EmptyInput.code(), "empty_input");
        assert_eq!(InvalidReason::FormatError.code(), "format_error");
        assert_eq!(InvalidReason::RegionError.code(), "region_error");
        assert_eq!(InvalidReason::ChecksumError.code(), "checksum_error");
    }

    #[test]
    fn result_conversions() {
        assert_eq!(ValidationOutcome::Valid.into_result(), Ok(()));
        assert_eq!(
            ValidationOutcome::Invalid(InvalidReason::FormatError).into_result(),
            Err(InvalidReason::FormatError)
        );
        assert_eq!(
            ValidationOutcome::from(Err(InvalidReason::EmptyInput)),
            ValidationOutcome::Invalid(InvalidReason::EmptyInput)
        );
        assert!(ValidationOutcome::from(Ok(())).is_valid());
        assert_eq!(ValidationOutcome::Valid.reason(), None);
    }
}
