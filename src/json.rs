use serde::Serialize;
use serde_json::{Map, Number, Value};
use strum::{Display, IntoStaticStr};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValueType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

pub fn value_type(value: &Value) -> ValueType {
    match value {
        Value::Null => ValueType::Null,
        Value::Bool(_) => ValueType::Bool,
        Value::Number(_) => ValueType::Number,
        Value::String(_) => ValueType::String,
        Value::Array(_) => ValueType::Array,
        Value::Object(_) => ValueType::Object,
    }
}

/// Copies the values of `patch` into `target`, but only for keys `target` already has.
/// Nested objects are merged key by key, any other value is replaced.
pub fn merge_existing(target: &mut Value, patch: &Value) {
    let (Value::Object(target), Value::Object(patch)) = (target, patch) else {
        return;
    };
    for (key, patch_value) in patch {
        let Some(target_value) = target.get_mut(key) else {
            continue;
        };
        if target_value.is_object() {
            merge_existing(target_value, patch_value);
        } else {
            *target_value = patch_value.clone();
        }
    }
}

/// Encodes a flat object as `key=value` pairs joined with `&`.
/// Values are written as plain text, without percent-encoding.
pub fn to_form_data(params: &Map<String, Value>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", form_text(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn form_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(values) => values
            .iter()
            .map(|value| match value {
                Value::Null => String::new(),
                other => form_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Number(number) => number_text(number),
        Value::Null | Value::Bool(_) => value.to_string(),
    }
}

/// Prints a number the way a browser does: integral floats lose their fraction and `-0` is `0`.
pub(crate) fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float == 0.0 => "0".to_string(),
        Some(float) if number.is_f64() => float.to_string(),
        _ => number.to_string(),
    }
}
