pub mod clients;
pub mod services;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Envelope, Health};

use crate::errors::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Success envelope with `value` stored under `data.<key>`.
pub(crate) fn success<T: Serialize>(message: &str, key: &str, value: &T) -> Result<Json<Envelope>, ApiError> {
    let value = serde_json::to_value(value).map_err(|e| ApiError::Internal(e.to_string()))?;
    let mut data = serde_json::Map::new();
    data.insert(key.to_string(), value);
    Ok(Json(Envelope::success(message, serde_json::Value::Object(data))))
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let client_routes = Router::new()
        .route("/clients", get(clients::list).post(clients::create))
        .route("/clients/attach", post(clients::attach))
        .route("/clients/detach", post(clients::detach))
        .route(
            "/clients/:id",
            get(clients::show).put(clients::update).patch(clients::update).delete(clients::destroy),
        );

    let service_routes = Router::new()
        .route("/services", get(services::list).post(services::create))
        .route(
            "/services/:id",
            get(services::show).put(services::update).patch(services::update).delete(services::destroy),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(client_routes)
        .merge(service_routes)
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
