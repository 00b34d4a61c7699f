use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

use crate::error::FieldError;
use crate::id_card;
use crate::patterns::{
    validate_email, validate_image_code, validate_number, validate_number_by_max,
    validate_number_by_min, validate_password, validate_phone, validate_phone_code,
    validate_positive_number,
};
use crate::secondary_validation::Validator;

const DEFAULT_MIN: f64 = 1.0;
const DEFAULT_MAX: f64 = 100.0;

fn default_min() -> f64 {
    DEFAULT_MIN
}

fn default_max() -> f64 {
    DEFAULT_MAX
}

/// One check applied to a form field.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum FieldRule {
    /// Landline with area code or mobile number. Required.
    Phone,
    /// Required.
    Email,
    /// Decimal number, at most 8 integer digits and 5 decimals.
    Number {
        #[serde_as(deserialize_as = "DefaultOnNull")]
        #[serde(default)]
        allow_empty: bool,
    },
    /// `0` or a positive integer.
    PositiveNumber {
        #[serde_as(deserialize_as = "DefaultOnNull")]
        #[serde(default)]
        allow_empty: bool,
    },
    NumberMin {
        #[serde(default = "default_min")]
        min: f64,
    },
    NumberMax {
        #[serde(default = "default_max")]
        max: f64,
        #[serde(default)]
        tip: Option<String>,
    },
    /// 15 digits, or 17 digits and a check character. No checksum.
    IdCardEasy {
        #[serde_as(deserialize_as = "DefaultOnNull")]
        #[serde(default)]
        allow_empty: bool,
    },
    /// Format, region code and check character.
    IdCardStrict {
        #[serde_as(deserialize_as = "DefaultOnNull")]
        #[serde(default)]
        allow_empty: bool,
    },
    Password,
    PhoneCode,
    ImageCode,
}

impl FieldRule {
    pub fn number_min(min: f64) -> Self {
        FieldRule::NumberMin { min }
    }

    pub fn number_max(max: f64) -> Self {
        FieldRule::NumberMax { max, tip: None }
    }

    pub fn id_card_strict(allow_empty: bool) -> Self {
        FieldRule::IdCardStrict { allow_empty }
    }

    pub fn check(&self, value: Option<&str>) -> Result<(), FieldError> {
        match self {
            FieldRule::Phone => validate_phone(value),
            FieldRule::Email => validate_email(value),
            FieldRule::Number { allow_empty } => validate_number(value, *allow_empty),
            FieldRule::PositiveNumber { allow_empty } => {
                validate_positive_number(value, *allow_empty)
            }
            FieldRule::NumberMin { min } => validate_number_by_min(value, *min),
            FieldRule::NumberMax { max, tip } => {
                validate_number_by_max(value, *max, tip.as_deref())
            }
            FieldRule::IdCardEasy { allow_empty } => id_card::validate_easy(value, *allow_empty)
                .into_result()
                .map_err(FieldError::from),
            FieldRule::IdCardStrict { allow_empty } => id_card::validate(value, *allow_empty)
                .into_result()
                .map_err(FieldError::from),
            FieldRule::Password => validate_password(value),
            FieldRule::PhoneCode => validate_phone_code(value),
            FieldRule::ImageCode => validate_image_code(value),
        }
    }
}

impl Validator for FieldRule {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.check(Some(candidate)).is_ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::outcome::InvalidReason;

    #[test]
    fn deserialize_rules() {
        let rules: Vec<FieldRule> = serde_json::from_str(
            r#"[
                {"type": "Phone"},
                {"type": "Number"},
                {"type": "Number", "allow_empty": null},
                {"type": "PositiveNumber", "allow_empty": true},
                {"type": "NumberMin"},
                {"type": "NumberMax", "max": 10, "tip": "Ten at most"},
                {"type": "IdCardStrict", "allow_empty": true}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            rules,
            vec![
                FieldRule::Phone,
                FieldRule::Number { allow_empty: false },
                FieldRule::Number { allow_empty: false },
                FieldRule::PositiveNumber { allow_empty: true },
                FieldRule::NumberMin { min: 1.0 },
                FieldRule::NumberMax {
                    max: 10.0,
                    tip: Some("Ten at most".to_string())
                },
                FieldRule::IdCardStrict { allow_empty: true },
            ]
        );
    }

    #[test]
    fn unknown_rule_type_is_rejected() {
        assert!(serde_json::from_str::<FieldRule>(r#"{"type": "Zipcode"}"#).is_err());
    }

    #[test]
    fn check_dispatch() {
        assert_eq!(FieldRule::Phone.check(Some("13812345678")), Ok(()));
        assert_eq!(
            FieldRule::id_card_strict(false).check(Some("99010119900307611X")),
            Err(FieldError::IdCard(InvalidReason::RegionError))
        );
        assert_eq!(FieldRule::id_card_strict(true).check(None), Ok(()));
        assert_eq!(
            FieldRule::IdCardEasy { allow_empty: false }.check(Some("")),
            Err(FieldError::IdCard(InvalidReason::EmptyInput))
        );
        assert_eq!(
            FieldRule::number_max(10.0).check(Some("11")),
            Err(FieldError::AboveMaximum {
                max: 10.0,
                tip: None
            })
        );
        assert_eq!(
            FieldRule::number_min(2.0).check(Some("1")),
            Err(FieldError::BelowMinimum { min: 2.0 })
        );
        assert!(FieldRule::PhoneCode.is_valid_match("123456"));
        assert!(!FieldRule::ImageCode.is_valid_match("12345"));
    }

    #[test]
    fn serialize_round_trip_shape() {
        assert_eq!(
            serde_json::to_value(FieldRule::IdCardStrict { allow_empty: true }).unwrap(),
            serde_json::json!({"type": "IdCardStrict", "allow_empty": true})
        );
    }
}
