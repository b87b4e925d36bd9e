//! This module provides the main entry point: a client that fetches the forecast page and
//! answers "what is the lowest visibility forecast between two times?".

use crate::aggregate::{aggregate, normalized, WindowMinimum};
use crate::error::VisibilityError;
use crate::forecast_page::page_loader::ForecastPageLoader;
use crate::forecast_page::table_extractor::extract_from_markup;
use crate::types::any_datetime::AnyDateTime;
use crate::types::reading::{HourlyVisibility, Reading};
use crate::types::table_layout::TableLayout;
use crate::types::time_window::TimeWindow;
use crate::types::visibility::Visibility;
use bon::bon;
use log::info;
use std::fmt::Display;
use std::time::Duration;

/// Forecast page used when no `page_url` is given (Swansea, Wales).
pub const DEFAULT_PAGE_URL: &str = "https://tides4fishing.com/uk/wales/swansea/forecast/visibility";
/// Upper bound on a single page download.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The client for querying forecast visibility.
///
/// Each query downloads the forecast page afresh, extracts its hourly table and reduces the
/// readings in the requested window. Nothing is cached between queries, so a single client
/// can be shared freely (e.g. behind an `Arc` in a web server).
///
/// # Examples
///
/// ```no_run
/// # use visibility_forecast::{VisibilityForecast, VisibilityError};
/// use chrono::NaiveDate;
///
/// # async fn run() -> Result<(), VisibilityError> {
/// let client = VisibilityForecast::builder().build()?;
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let lowest = client
///     .min_visibility()
///     .start(day.and_hms_opt(6, 0, 0).unwrap())
///     .end("2024-01-01T18:00")
///     .call()
///     .await?;
/// println!("Lowest visibility: {}", lowest);
/// # Ok(())
/// # }
/// ```
pub struct VisibilityForecast {
    loader: ForecastPageLoader,
    layout: TableLayout,
}

#[bon]
impl VisibilityForecast {
    /// Creates a new client.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.page_url(..)`: page to download (default [`DEFAULT_PAGE_URL`]).
    /// * `.timeout(Duration)`: bound on each download (default [`DEFAULT_TIMEOUT`]).
    /// * `.layout(TableLayout)`: markup contract of the page (default [`TableLayout::default()`]).
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::ForecastPage`] if the HTTP client cannot be constructed.
    #[builder]
    pub fn new(
        #[builder(into)] page_url: Option<String>,
        timeout: Option<Duration>,
        layout: Option<TableLayout>,
    ) -> Result<Self, VisibilityError> {
        let page_url = page_url.unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());
        Ok(Self {
            loader: ForecastPageLoader::new(&page_url, timeout.unwrap_or(DEFAULT_TIMEOUT))?,
            layout: layout.unwrap_or_default(),
        })
    }

    /// The page this client downloads.
    pub fn page_url(&self) -> &str {
        self.loader.page_url()
    }

    /// Downloads the forecast page and returns every dated hour reading in its table.
    ///
    /// # Errors
    ///
    /// * [`VisibilityError::ForecastPage`] if the download fails.
    /// * [`VisibilityError::Extraction`] if the page has no forecast table.
    pub async fn readings(&self) -> Result<Vec<Reading>, VisibilityError> {
        let markup = self.loader.fetch().await?;
        Ok(extract_from_markup(&markup, &self.layout)?)
    }

    /// Fetches the lowest forecast visibility between `start` and `end` (both inclusive).
    ///
    /// Call `.start(..)`, `.end(..)` and then `.call().await`. Both bounds take any
    /// [`AnyDateTime`]: chrono values, or strings such as `"2024-01-01T06:00"`.
    ///
    /// # Errors
    ///
    /// * [`VisibilityError::Query`] if a bound cannot be resolved; nothing is downloaded.
    /// * [`VisibilityError::ForecastPage`] / [`VisibilityError::Extraction`] as for
    ///   [`VisibilityForecast::readings`].
    /// * [`VisibilityError::NoData`] if no usable reading falls inside the window, which
    ///   includes every window whose `start` is after its `end`.
    #[builder]
    pub async fn min_visibility<S, E>(
        &self,
        start: S,
        end: E,
    ) -> Result<Visibility, VisibilityError>
    where
        S: AnyDateTime + Display,
        E: AnyDateTime + Display,
    {
        let window = TimeWindow::resolve(start, end)?;
        let readings = self.readings().await?;

        match aggregate(&readings, &window) {
            WindowMinimum::Minimum(visibility) => {
                info!("Minimum visibility in {} is {}", window, visibility);
                Ok(visibility)
            }
            WindowMinimum::NoData => {
                info!("No visibility readings in {}", window);
                Err(VisibilityError::NoData { window })
            }
        }
    }

    /// Fetches the normalized hour-by-hour visibility between `start` and `end`
    /// (both inclusive), in page order. Unparseable readings are left out.
    #[builder]
    pub async fn hourly_visibility<S, E>(
        &self,
        start: S,
        end: E,
    ) -> Result<Vec<HourlyVisibility>, VisibilityError>
    where
        S: AnyDateTime + Display,
        E: AnyDateTime + Display,
    {
        let window = TimeWindow::resolve(start, end)?;
        let readings = self.readings().await?;
        Ok(normalized(&readings, &window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast_page::error::ExtractionError;
    use crate::forecast_page::fixtures::{day_row, forecast_page, hour_row};
    use crate::types::query_error::QueryError;
    use chrono::{NaiveDate, NaiveDateTime};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    async fn serve(body: String) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> Result<VisibilityForecast, VisibilityError> {
        VisibilityForecast::builder()
            .page_url(server.uri())
            .timeout(Duration::from_secs(5))
            .build()
    }

    fn single_hour_page() -> String {
        forecast_page(&[
            day_row("Monday 01 January 2024"),
            hour_row("00:00", "less than 1 km"),
        ])
    }

    #[test]
    fn defaults_point_at_swansea() -> Result<(), VisibilityError> {
        let client = VisibilityForecast::builder().build()?;
        assert_eq!(client.page_url(), DEFAULT_PAGE_URL);
        Ok(())
    }

    #[tokio::test]
    async fn minimum_within_the_day() -> Result<(), VisibilityError> {
        let server = serve(single_hour_page()).await;
        let client = client_for(&server)?;

        let lowest = client
            .min_visibility()
            .start(at(1, 0, 0))
            .end(at(1, 23, 59))
            .call()
            .await?;
        assert_eq!(lowest, Visibility(1000));
        Ok(())
    }

    #[tokio::test]
    async fn window_without_readings_is_no_data() -> Result<(), VisibilityError> {
        let server = serve(single_hour_page()).await;
        let client = client_for(&server)?;

        let result = client
            .min_visibility()
            .start(at(2, 0, 0))
            .end(at(2, 23, 59))
            .call()
            .await;
        match result {
            Err(VisibilityError::NoData { window }) => {
                assert_eq!(window, TimeWindow::new(at(2, 0, 0), at(2, 23, 59)))
            }
            other => panic!("expected NoData, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn page_without_table_is_an_extraction_failure() -> Result<(), VisibilityError> {
        let server = serve("<html><body><p>Moved</p></body></html>".to_string()).await;
        let client = client_for(&server)?;

        let result = client
            .min_visibility()
            .start(at(1, 0, 0))
            .end(at(1, 23, 59))
            .call()
            .await;
        assert!(matches!(
            result,
            Err(VisibilityError::Extraction(ExtractionError::TableNotFound { .. }))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn plain_reading_beats_open_ended_one() -> Result<(), VisibilityError> {
        let server = serve(forecast_page(&[
            day_row("Monday 01 January 2024"),
            hour_row("03:00", "4 km"),
            hour_row("06:00", "more than 10 km"),
        ]))
        .await;
        let client = client_for(&server)?;

        let lowest = client
            .min_visibility()
            .start(at(1, 0, 0))
            .end(at(1, 23, 59))
            .call()
            .await?;
        assert_eq!(lowest, Visibility(4000));
        Ok(())
    }

    #[tokio::test]
    async fn hourly_series_spans_days() -> Result<(), VisibilityError> {
        let server = serve(forecast_page(&[
            day_row("Monday 01 January 2024"),
            hour_row("22:00", "6 km"),
            hour_row("23:00", "unknown"),
            day_row("Tuesday 02 January 2024"),
            hour_row("00:00", "less than 1 km"),
            hour_row("01:00", "3 km"),
        ]))
        .await;
        let client = client_for(&server)?;

        let series = client
            .hourly_visibility()
            .start(at(1, 22, 0))
            .end(at(2, 0, 0))
            .call()
            .await?;
        let values: Vec<(NaiveDateTime, u32)> = series
            .iter()
            .map(|hour| (hour.timestamp, hour.visibility.meters()))
            .collect();
        assert_eq!(values, vec![(at(1, 22, 0), 6000), (at(2, 0, 0), 1000)]);
        Ok(())
    }

    #[tokio::test]
    async fn bounds_accept_dates_and_strings() -> Result<(), VisibilityError> {
        let server = serve(forecast_page(&[
            day_row("Monday 01 January 2024"),
            hour_row("00:00", "5 km"),
            hour_row("10:00", "2 km"),
            hour_row("11:00", "less than 1 km"),
        ]))
        .await;
        let client = client_for(&server)?;

        let lowest = client
            .min_visibility()
            .start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .end("2024-01-01T10")
            .call()
            .await?;
        assert_eq!(lowest, Visibility(2000));

        let series = client
            .hourly_visibility()
            .start(String::from("20240101T1000"))
            .end(at(1, 11, 0).and_utc())
            .call()
            .await?;
        assert_eq!(series.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn unresolvable_bound_is_a_query_error() -> Result<(), VisibilityError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(single_hour_page()))
            .expect(0)
            .mount(&server)
            .await;
        let client = client_for(&server)?;

        let result = client
            .min_visibility()
            .start(at(1, 0, 0))
            .end("next week")
            .call()
            .await;
        match result {
            Err(VisibilityError::Query(error)) => assert_eq!(
                error,
                QueryError::InvalidDateTime {
                    parameter: "end",
                    value: "next week".to_string()
                }
            ),
            other => panic!("expected a query error, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn server_error_is_a_forecast_page_failure() -> Result<(), VisibilityError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let client = client_for(&server)?;

        assert!(matches!(
            client.readings().await,
            Err(VisibilityError::ForecastPage(_))
        ));
        Ok(())
    }
}
