use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ApiError;

/// JSON body whose decode failures become a 422 envelope instead of axum's
/// plain-text rejection. An empty body reads as `{}` so that missing fields
/// are reported by the field rules. Only unparsable JSON or a non-object
/// top level is rejected here; wrong field types are left to the input types.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::malformed(rejection.body_text()))?;
        decode(&bytes).map(JsonBody)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) { b"{}" } else { bytes };
    let value: Value = serde_json::from_slice(raw).map_err(|e| ApiError::malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(ApiError::malformed("The request body must be a JSON object."));
    }
    serde_json::from_value(value).map_err(|e| ApiError::malformed(e.to_string()))
}

/// Route ids are integers; anything else cannot name a record.
pub fn parse_id(raw: &str, entity: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::NotFound(format!("Invalid {entity} id")))
}
