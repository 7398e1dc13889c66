//! Field-level validation shared by the client and service managers.
//!
//! Rules are declared with `validator` on the input structs; this module turns
//! the resulting `ValidationErrors` into the public `field -> [messages]` map.
//! Messages come from [`CUSTOM_MESSAGES`] (keyed by `field.rule`) and fall back
//! to a default English sentence per rule. Fields are reported in the order
//! their rules are declared.

use common::types::ValidationMessages;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// Locale-specific overrides keyed by `field.rule`.
pub const CUSTOM_MESSAGES: &[(&str, &str)] = &[
    ("name.required", "El campo nombre es obligatorio."),
    ("email.email", "Debes introducir un email válido."),
    ("price.integer", "Debes introducir un número."),
];

/// Map a `validator` error code onto the public rule name.
pub fn rule_name(code: &str) -> &str {
    match code {
        "length" => "max",
        other => other,
    }
}

pub fn message_for(field: &str, rule: &str, max: Option<&Value>) -> String {
    let key = format!("{field}.{rule}");
    if let Some((_, msg)) = CUSTOM_MESSAGES.iter().find(|(k, _)| *k == key) {
        return (*msg).to_string();
    }
    let attr = field.replace('_', " ");
    match rule {
        "required" => format!("The {attr} field is required."),
        "string" => format!("The {attr} field must be a string."),
        "email" => format!("The {attr} field must be a valid email address."),
        "integer" => format!("The {attr} field must be an integer."),
        "unique" => format!("The {attr} has already been taken."),
        "max" => match max {
            Some(n) => format!("The {attr} field must not be greater than {n} characters."),
            None => format!("The {attr} field is too long."),
        },
        _ => format!("The {attr} field is invalid."),
    }
}

/// Convert `validator` output into per-field messages, fields in `order`.
pub fn collect(errors: &ValidationErrors, order: &[&str]) -> ValidationMessages {
    let field_errors = errors.field_errors();
    let mut out = ValidationMessages::new();
    for field in order {
        let Some(errs) = field_errors.get(*field) else { continue };
        let entry = out.entry(field.to_string()).or_default();
        for e in errs.iter() {
            entry.push(message_for(field, rule_name(&e.code), e.params.get("max")));
        }
    }
    out
}

/// Re-sort fields into declaration order; unknown fields go last.
pub fn ordered(mut messages: ValidationMessages, order: &[&str]) -> ValidationMessages {
    let rank = |field: &str| order.iter().position(|f| *f == field).unwrap_or(order.len());
    messages.sort_by(|a, _, b, _| rank(a.as_str()).cmp(&rank(b.as_str())));
    messages
}

/// A present value that is not a JSON string fails `string` and nothing else.
pub fn reject_non_text(messages: &mut ValidationMessages, field: &str, value: Option<&Text>) {
    if matches!(value, Some(Text::Invalid)) {
        messages.insert(field.to_string(), vec![message_for(field, "string", None)]);
    }
}

/// Append one rule violation that was checked outside `validator` (e.g. `unique`).
pub fn push(messages: &mut ValidationMessages, field: &str, rule: &str) {
    messages.entry(field.to_string()).or_default().push(message_for(field, rule, None));
}

/// Text input. Non-string JSON deserializes to `Invalid` so the `string` rule
/// can report it next to the other fields' violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Text {
    Valid(String),
    Invalid,
}

impl Text {
    pub fn from_json(raw: Value) -> Self {
        match raw {
            Value::String(s) => Self::Valid(s),
            _ => Self::Invalid,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Valid(s) => Some(s),
            Self::Invalid => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Valid(s) => Some(s),
            Self::Invalid => None,
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self { Self::Valid(s.to_string()) }
}

impl From<String> for Text {
    fn from(s: String) -> Self { Self::Valid(s) }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_json(Value::deserialize(deserializer)?))
    }
}

/// Trim, and treat blank strings as absent.
pub fn normalize_text(value: Option<Text>) -> Option<Text> {
    match value? {
        Text::Valid(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(Text::Valid(trimmed.to_string())) }
        }
        Text::Invalid => Some(Text::Invalid),
    }
}

/// The string a declarative rule should see; non-strings are checked by `string` instead.
pub fn text_value(value: &Option<Text>) -> Option<String> {
    value.as_ref().and_then(Text::as_str).map(str::to_string)
}

/// Integer input accepting JSON numbers and numeric strings.
///
/// Anything else deserializes to `Invalid` so the `integer` rule can report it
/// instead of the whole body being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Integer {
    Valid(i64),
    Blank,
    Invalid,
}

impl Integer {
    pub fn from_json(raw: &Value) -> Self {
        match raw {
            Value::Number(n) => n.as_i64().map_or(Self::Invalid, Self::Valid),
            Value::String(s) if s.trim().is_empty() => Self::Blank,
            Value::String(s) => s.trim().parse::<i64>().map_or(Self::Invalid, Self::Valid),
            _ => Self::Invalid,
        }
    }

    /// Value when it fits the `INTEGER` column.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Valid(v) => i32::try_from(*v).ok(),
            Self::Blank | Self::Invalid => None,
        }
    }
}

impl From<i64> for Integer {
    fn from(v: i64) -> Self { Self::Valid(v) }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}

/// Drop blank integers so `required` reports them.
pub fn normalize_integer(value: Option<Integer>) -> Option<Integer> {
    value.filter(|v| *v != Integer::Blank)
}

pub fn validate_integer(value: &Integer) -> Result<(), ValidationError> {
    match value.as_i32() {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("integer")),
    }
}
