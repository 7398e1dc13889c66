use common::types::ValidationMessages;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(ValidationMessages),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// `NotFound` carrying the public "Invalid <entity> id" message.
    pub fn invalid_id(entity: &str) -> Self { Self::NotFound(format!("Invalid {} id", entity)) }
}
