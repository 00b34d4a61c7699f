// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod collections;
mod error;
mod field_rule;
mod form;
mod id_card;
mod json;
mod number;
mod outcome;
mod path;
mod patterns;
mod secondary_validation;
mod stats;

// This is the public API of the form rules library
pub use collections::{chunk, filter_repeat, find_index};
pub use error::FieldError;
pub use field_rule::FieldRule;
pub use form::{FieldRules, FormReport, FormRules};
pub use id_card::{is_known_region, region_name, validate, validate_easy, IdentityValidator};
pub use json::{merge_existing, to_form_data, value_type, ValueType};
pub use number::{format_magnitude, input_only_number};
pub use outcome::{InvalidReason, ValidationOutcome};
pub use path::{Path, PathSegment};
pub use patterns::{
    parse_number, validate_email, validate_image_code, validate_number, validate_number_by_max,
    validate_number_by_min, validate_password, validate_phone, validate_phone_code,
    validate_positive_number,
};
pub use secondary_validation::{ChineseIdChecksum, Validator, PARITY_MAP, WEIGHT_FACTORS};
