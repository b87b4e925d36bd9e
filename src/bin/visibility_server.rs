use clap::Parser;
use tracing_subscriber::EnvFilter;
use visibility_forecast::server::config::ServerConfig;
use visibility_forecast::server::{serve, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Library code logs through `log`; the subscriber bridges those records.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    serve(ServerConfig::parse()).await
}
