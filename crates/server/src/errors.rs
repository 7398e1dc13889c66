use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::{Envelope, ValidationMessages};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Handler failure rendered as an error envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("validation failed")]
    Validation(ValidationMessages),
    #[error("internal: {0}")]
    Internal(String),
}

impl ApiError {
    /// Body that could not be decoded; reported under the `body` field.
    pub fn malformed(detail: impl Into<String>) -> Self {
        let mut messages = ValidationMessages::new();
        messages.insert("body".into(), vec![detail.into()]);
        Self::Validation(messages)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Validation(messages) => Self::Validation(messages),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::NotFound(msg) => Envelope::error(msg),
            Self::Validation(messages) => Envelope::validation(messages),
            Self::Internal(detail) => {
                error!(error = %detail, "request failed");
                Envelope::error("Internal server error")
            }
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
