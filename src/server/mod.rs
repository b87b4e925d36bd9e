//! HTTP endpoint exposing the visibility query as `GET /visibility?start=..&end=..`.

pub mod config;
pub mod response;
pub mod routes;

use crate::server::config::ServerConfig;
use crate::visibility_forecast::VisibilityForecast;
use crate::VisibilityError;
use axum::routing::get;
use axum::Router;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub forecast: Arc<VisibilityForecast>,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Forecast(#[from] VisibilityError),

    #[error("Failed to bind {0}")]
    Bind(SocketAddr, #[source] std::io::Error),

    #[error("Server terminated unexpectedly")]
    Serve(#[source] std::io::Error),
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/visibility", get(routes::visibility_handler))
        .layer(CatchPanicLayer::custom(response::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `config.bind` and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let forecast = config.forecast()?;
    info!("Serving visibility for {}", forecast.page_url());
    let app = router(AppState {
        forecast: Arc::new(forecast),
    });

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| ServerError::Bind(config.bind, e))?;
    info!("Listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
