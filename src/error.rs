use crate::forecast_page::error::{ExtractionError, ForecastPageError};
use crate::types::query_error::QueryError;
use crate::types::time_window::TimeWindow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisibilityError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    ForecastPage(#[from] ForecastPageError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("No visibility data found")]
    NoData { window: TimeWindow },
}
