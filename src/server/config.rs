use crate::visibility_forecast::{VisibilityForecast, DEFAULT_PAGE_URL};
use crate::VisibilityError;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Command line / environment configuration of the visibility server.
#[derive(Debug, Clone, Parser)]
#[command(name = "visibility_server", about = "Serve the minimum forecast visibility over HTTP")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "VISIBILITY_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Forecast page to scrape.
    #[arg(long, env = "VISIBILITY_PAGE_URL", default_value = DEFAULT_PAGE_URL)]
    pub page_url: String,

    /// Timeout for each forecast page download, in seconds.
    #[arg(long, env = "VISIBILITY_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl ServerConfig {
    pub fn forecast(&self) -> Result<VisibilityForecast, VisibilityError> {
        VisibilityForecast::builder()
            .page_url(self.page_url.as_str())
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }
}
