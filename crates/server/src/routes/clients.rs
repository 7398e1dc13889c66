use axum::{
    extract::{Path, State},
    Json,
};
use common::types::Envelope;
use service::clients::{AssociationInput, ClientInput};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{parse_id, JsonBody};
use crate::routes::success;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/clients", tag = "clients",
    responses((status = 200, description = "Clients retrieved successfully", body = crate::openapi::EnvelopeDoc))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope>, ApiError> {
    let clients = state.clients.list().await?;
    info!(count = clients.len(), "list clients");
    success("Clients retrieved successfully", "clients", &clients)
}

#[utoipa::path(
    post, path = "/clients", tag = "clients",
    request_body = crate::openapi::ClientInputDoc,
    responses(
        (status = 200, description = "Client created successfully", body = crate::openapi::EnvelopeDoc),
        (status = 422, description = "Validation error", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn create(State(state): State<AppState>, JsonBody(input): JsonBody<ClientInput>) -> Result<Json<Envelope>, ApiError> {
    let client = state.clients.create(input).await?;
    success("Client created successfully", "client", &client)
}

#[utoipa::path(
    get, path = "/clients/{id}", tag = "clients",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 200, description = "Correct request", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Invalid client id", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope>, ApiError> {
    let id = parse_id(&id, "client")?;
    let client = state.clients.get(id).await?;
    success("Correct request", "client", &client)
}

#[utoipa::path(
    put, path = "/clients/{id}", tag = "clients",
    params(("id" = i32, Path, description = "Client id")),
    request_body = crate::openapi::ClientInputDoc,
    responses(
        (status = 200, description = "Client updated successfully", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Invalid client id", body = crate::openapi::EnvelopeDoc),
        (status = 422, description = "Validation error", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<JsonBody<ClientInput>, ApiError>,
) -> Result<Json<Envelope>, ApiError> {
    let id = parse_id(&id, "client")?;
    let input = match body {
        Ok(JsonBody(input)) => input,
        Err(rejection) => {
            // an unknown id wins over an unreadable body
            state.clients.get(id).await?;
            return Err(rejection);
        }
    };
    let client = state.clients.update(id, input).await?;
    success("Client updated successfully", "client", &client)
}

#[utoipa::path(
    delete, path = "/clients/{id}", tag = "clients",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client deleted successfully", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Invalid client id", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Envelope>, ApiError> {
    let id = parse_id(&id, "client")?;
    let client = state.clients.delete(id).await?;
    success("Client deleted successfully", "client", &client)
}

#[utoipa::path(
    post, path = "/clients/attach", tag = "clients",
    request_body = crate::openapi::AssociationInputDoc,
    responses(
        (status = 200, description = "Service attached successfully", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Invalid client or service id", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn attach(State(state): State<AppState>, JsonBody(input): JsonBody<AssociationInput>) -> Result<Json<Envelope>, ApiError> {
    let client = state.clients.attach(input).await?;
    success("Service attached successfully", "client", &client)
}

#[utoipa::path(
    post, path = "/clients/detach", tag = "clients",
    request_body = crate::openapi::AssociationInputDoc,
    responses(
        (status = 200, description = "Service detached successfully", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Invalid client or service id", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn detach(State(state): State<AppState>, JsonBody(input): JsonBody<AssociationInput>) -> Result<Json<Envelope>, ApiError> {
    let client = state.clients.detach(input).await?;
    success("Service detached successfully", "client", &client)
}
