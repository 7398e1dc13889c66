use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Outcome marker carried by every response envelope.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Field name -> ordered list of human readable violations.
/// Fields keep the order in which their rules are declared.
pub type ValidationMessages = IndexMap<String, Vec<String>>;

/// Uniform `{status, message, data?, validation?}` response body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Envelope {
    pub status: ApiStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationMessages>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self { status: ApiStatus::Success, message: message.into(), data: Some(data), validation: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: ApiStatus::Error, message: message.into(), data: None, validation: None }
    }

    pub fn validation(messages: ValidationMessages) -> Self {
        Self {
            status: ApiStatus::Error,
            message: "Validation error".into(),
            data: None,
            validation: Some(messages),
        }
    }
}
