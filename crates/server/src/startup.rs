use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use dotenvy::dotenv;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> Result<SocketAddr, StartupError> {
    let bind = match configs::load_default() {
        Ok(cfg) => cfg.server.bind_addr(),
        Err(e) => {
            warn!(error = %e, "no usable config file, using SERVER_HOST/SERVER_PORT");
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            format!("{}:{}", host, port)
        }
    };
    bind.parse().map_err(|_| StartupError::InvalidConfig(format!("bad bind address {bind}")))
}

/// Connect, migrate and build the router.
pub async fn build_app() -> Result<Router, StartupError> {
    let db = models::db::connect().await?;
    models::db::migrate(&db).await?;
    Ok(routes::build_router(AppState::new(db)))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let app = build_app().await?;
    let addr = load_bind_addr()?;
    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
