use crate::forecast_page::error::ForecastPageError;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

pub struct ForecastPageLoader {
    page_url: String,
    download_client: Client,
}

impl ForecastPageLoader {
    pub fn new(page_url: &str, timeout: Duration) -> Result<ForecastPageLoader, ForecastPageError> {
        let download_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ForecastPageError::ClientBuild)?;
        Ok(ForecastPageLoader {
            page_url: page_url.to_string(),
            download_client,
        })
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Downloads the forecast page markup. Non-success statuses are errors.
    pub async fn fetch(&self) -> Result<String, ForecastPageError> {
        let url = self.page_url.clone();
        info!("Downloading forecast page from {}", url);

        let response = self
            .download_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ForecastPageError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ForecastPageError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ForecastPageError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| ForecastPageError::BodyRead(url.clone(), e))?;
        info!("Downloaded {} bytes of forecast markup from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_returns_the_page_body() -> Result<(), ForecastPageError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast/visibility"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let loader = ForecastPageLoader::new(
            &format!("{}/forecast/visibility", server.uri()),
            Duration::from_secs(5),
        )?;
        assert_eq!(loader.fetch().await?, "<html></html>");
        Ok(())
    }

    #[tokio::test]
    async fn fetch_reports_http_status() -> Result<(), ForecastPageError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let loader = ForecastPageLoader::new(&server.uri(), Duration::from_secs(5))?;
        match loader.fetch().await {
            Err(ForecastPageError::HttpStatus { status, .. }) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE)
            }
            other => panic!("expected HttpStatus error, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn fetch_times_out() -> Result<(), ForecastPageError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let loader = ForecastPageLoader::new(&server.uri(), Duration::from_millis(200))?;
        assert!(matches!(
            loader.fetch().await,
            Err(ForecastPageError::NetworkRequest(..))
        ));
        Ok(())
    }
}
