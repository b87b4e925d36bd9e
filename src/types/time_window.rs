use crate::types::any_datetime::AnyDateTime;
use crate::types::query_error::QueryError;
use chrono::NaiveDateTime;
use std::fmt;

/// An inclusive `[start, end]` range of forecast wall-clock times.
///
/// `start <= end` is not enforced: a reversed window is valid and simply matches nothing.
///
/// # Examples
///
/// ```
/// use visibility_forecast::TimeWindow;
///
/// let window = TimeWindow::resolve("2024-01-01T00:00", "2024-01-01T23:59").unwrap();
/// assert!(window.contains(window.start));
/// assert!(window.contains(window.end));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Builds a window from any pair of [`AnyDateTime`] values.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidDateTime`] naming the first bound that cannot be resolved.
    pub fn resolve<S, E>(start: S, end: E) -> Result<Self, QueryError>
    where
        S: AnyDateTime + fmt::Display,
        E: AnyDateTime + fmt::Display,
    {
        Ok(Self {
            start: resolve_bound("start", start)?,
            end: resolve_bound("end", end)?,
        })
    }

    /// Whether `timestamp` lies within the window, boundaries included.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

fn resolve_bound<T>(parameter: &'static str, value: T) -> Result<NaiveDateTime, QueryError>
where
    T: AnyDateTime + fmt::Display,
{
    let text = value.to_string();
    value
        .get_naive_datetime()
        .ok_or(QueryError::InvalidDateTime {
            parameter,
            value: text,
        })
}
