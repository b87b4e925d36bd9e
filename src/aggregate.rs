use crate::types::reading::{HourlyVisibility, Reading};
use crate::types::time_window::TimeWindow;
use crate::types::visibility::Visibility;
use log::debug;

/// Outcome of reducing a window's readings to their minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMinimum {
    /// Lowest normalized visibility among the readings inside the window.
    Minimum(Visibility),
    /// No reading inside the window could be normalized.
    NoData,
}

/// Filters `readings` to `window` (inclusive) and normalizes the survivors.
///
/// Readings whose text does not normalize are dropped. Source order is preserved.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use visibility_forecast::{normalized, Reading, TimeWindow, Visibility};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let noon = day.and_hms_opt(12, 0, 0).unwrap();
/// let readings = vec![Reading::new(noon, "6 km"), Reading::new(noon, "fog")];
/// let window = TimeWindow::new(day.and_hms_opt(0, 0, 0).unwrap(), noon);
///
/// let series = normalized(&readings, &window);
/// assert_eq!(series.len(), 1);
/// assert_eq!(series[0].visibility, Visibility(6000));
/// ```
pub fn normalized(readings: &[Reading], window: &TimeWindow) -> Vec<HourlyVisibility> {
    readings
        .iter()
        .filter(|reading| window.contains(reading.timestamp))
        .filter_map(|reading| match Visibility::from_text(&reading.visibility_text) {
            Some(visibility) => Some(HourlyVisibility {
                timestamp: reading.timestamp,
                visibility,
            }),
            None => {
                debug!(
                    "Dropping unparseable visibility '{}' at {}",
                    reading.visibility_text, reading.timestamp
                );
                None
            }
        })
        .collect()
}

/// Reduces the readings inside `window` to their minimum visibility.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use visibility_forecast::{aggregate, Reading, TimeWindow, Visibility, WindowMinimum};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let readings = vec![
///     Reading::new(day.and_hms_opt(3, 0, 0).unwrap(), "4 km"),
///     Reading::new(day.and_hms_opt(6, 0, 0).unwrap(), "more than 10 km"),
/// ];
/// let window = TimeWindow::new(
///     day.and_hms_opt(0, 0, 0).unwrap(),
///     day.and_hms_opt(23, 59, 0).unwrap(),
/// );
///
/// assert_eq!(aggregate(&readings, &window), WindowMinimum::Minimum(Visibility(4000)));
/// ```
pub fn aggregate(readings: &[Reading], window: &TimeWindow) -> WindowMinimum {
    normalized(readings, window)
        .into_iter()
        .map(|hour| hour.visibility)
        .min()
        .map_or(WindowMinimum::NoData, WindowMinimum::Minimum)
}
