mod aggregate;
mod error;
mod forecast_page;
mod types;
mod visibility_forecast;

#[cfg(feature = "server")]
pub mod server;

pub use error::VisibilityError;
pub use visibility_forecast::*;

pub use aggregate::{aggregate, normalized, WindowMinimum};

pub use forecast_page::error::{ExtractionError, ForecastPageError};
pub use forecast_page::table_extractor::{extract_from_markup, extract_readings};

pub use types::any_datetime::AnyDateTime;
pub use types::query_error::QueryError;
pub use types::reading::{ForecastRow, HourlyVisibility, Reading};
pub use types::table_layout::*;
pub use types::time_window::TimeWindow;
pub use types::visibility::{Visibility, LESS_THAN_METERS, MORE_THAN_METERS};
