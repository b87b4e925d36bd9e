//! Describes where the forecast table lives in the page and which columns hold what.
//!
//! Everything the extractor assumes about the page's markup is collected here, so a layout
//! change on the source site is a single, visible edit.

/// CSS locator of the forecast table on the default page.
pub const DEFAULT_TABLE_SELECTOR: &str = "#weather-forecast-table";
/// Class carried by rows whose only content is a calendar date.
pub const DAY_ROW_CLASS: &str = "weather-day";
/// Class carried by rows holding one hour's forecast.
pub const HOUR_ROW_CLASS: &str = "weather-hour";
/// Cell index of the time of day ("HH:MM") in an hour row.
pub const TIME_COLUMN: usize = 0;
/// Cell index of the visibility text ("4 km", "less than 1 km", ...) in an hour row.
pub const VISIBILITY_COLUMN: usize = 9;
/// Date header format, e.g. "Monday 01 January 2024".
pub const DATE_HEADER_FORMAT: &str = "%A %d %B %Y";
/// Time-of-day format of the first hour-row cell.
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// The markup contract between the forecast page and the table extractor.
///
/// [`TableLayout::default()`] matches the tides4fishing visibility page. Override individual
/// fields when pointing the client at a page with the same structure but different markers.
///
/// # Examples
///
/// ```
/// use visibility_forecast::TableLayout;
///
/// let layout = TableLayout::default();
/// assert_eq!(layout.visibility_column, 9);
/// assert_eq!(layout.min_cells(), 10);
///
/// let custom = TableLayout {
///     table_selector: "table.forecast".to_string(),
///     ..TableLayout::default()
/// };
/// assert_eq!(custom.hour_row_class, "weather-hour");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// CSS selector of the table element.
    pub table_selector: String,
    /// Class marking a date header row.
    pub day_row_class: String,
    /// Class marking an hour row.
    pub hour_row_class: String,
    /// Index of the time-of-day cell.
    pub time_column: usize,
    /// Index of the visibility cell.
    pub visibility_column: usize,
    /// `chrono` format of a date header's text.
    pub date_format: String,
    /// `chrono` format of the time-of-day cell.
    pub time_format: String,
}

impl TableLayout {
    /// Minimum number of `td` cells an hour row needs to contain both the time and the
    /// visibility column.
    pub fn min_cells(&self) -> usize {
        self.time_column.max(self.visibility_column) + 1
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
            day_row_class: DAY_ROW_CLASS.to_string(),
            hour_row_class: HOUR_ROW_CLASS.to_string(),
            time_column: TIME_COLUMN,
            visibility_column: VISIBILITY_COLUMN,
            date_format: DATE_HEADER_FORMAT.to_string(),
            time_format: TIME_OF_DAY_FORMAT.to_string(),
        }
    }
}
