use axum::{
    extract::{Path, State},
    Json,
};
use common::types::Envelope;
use service::services::ServiceInput;

use crate::errors::ApiError;
use crate::extract::{parse_id, JsonBody};
use crate::routes::success;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/services", tag = "services",
    responses((status = 200, description = "Services retrieved successfully", body = crate::openapi::EnvelopeDoc))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope>, ApiError> {
    let services = state.services.list().await?;
    success("Services retrieved successfully", "services", &services)
}

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Service created successfully", body = crate::openapi::EnvelopeDoc),
        (status = 422, description = "Validation error", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn create(State(state): State<AppState>, JsonBody(input): JsonBody<ServiceInput>) -> Result<Json<Envelope>, ApiError> {
    let service = state.services.create(input).await?;
    success("Service created successfully", "service", &service)
}

#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Correct request", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Invalid service id", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope>, ApiError> {
    let id = parse_id(&id, "service")?;
    let service = state.services.get(id).await?;
    success("Correct request", "service", &service)
}

#[utoipa::path(
    put, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Service updated successfully", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Invalid service id", body = crate::openapi::EnvelopeDoc),
        (status = 422, description = "Validation error", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<JsonBody<ServiceInput>, ApiError>,
) -> Result<Json<Envelope>, ApiError> {
    let id = parse_id(&id, "service")?;
    let input = match body {
        Ok(JsonBody(input)) => input,
        Err(rejection) => {
            // an unknown id wins over an unreadable body
            state.services.get(id).await?;
            return Err(rejection);
        }
    };
    let service = state.services.update(id, input).await?;
    success("Service updated successfully", "service", &service)
}

#[utoipa::path(
    delete, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service deleted successfully", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Invalid service id", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope>, ApiError> {
    let id = parse_id(&id, "service")?;
    let service = state.services.delete(id).await?;
    success("Service deleted successfully", "service", &service)
}
