//! Turns the forecast page's table into a sequence of [`Reading`]s.
//!
//! The table interleaves date header rows with hour rows. Each hour row is dated by the most
//! recent header above it, which is tracked as an explicit [`DateContext`] folded over the
//! rows. Malformed rows are skipped and logged; only a missing table fails the extraction.

use crate::forecast_page::error::ExtractionError;
use crate::types::reading::{ForecastRow, Reading};
use crate::types::table_layout::TableLayout;
use chrono::{NaiveDate, NaiveTime, Weekday};
use log::{debug, info};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Why a table row produced no reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum RowSkip {
    #[error("unparseable date header '{0}'")]
    MalformedDate(String),

    #[error("hour row has {found} cells, need at least {required}")]
    TooFewCells { found: usize, required: usize },

    #[error("unparseable time of day '{0}'")]
    MalformedTime(String),

    #[error("hour row '{0}' appears before any date header")]
    NoDateContext(NaiveTime),
}

/// The date governing the hour rows currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DateContext {
    #[default]
    NoDateSeen,
    DateSeen(NaiveDate),
}

impl DateContext {
    /// Advances the context over one classified row, yielding the row's reading if any.
    ///
    /// A malformed header drops the context so following hours are not attributed to a
    /// stale date.
    fn advance(
        self,
        row: Result<ForecastRow, RowSkip>,
    ) -> (DateContext, Result<Option<Reading>, RowSkip>) {
        match (self, row) {
            (_, Ok(ForecastRow::DateHeader(date))) => (DateContext::DateSeen(date), Ok(None)),
            (_, Err(skip @ RowSkip::MalformedDate(_))) => (DateContext::NoDateSeen, Err(skip)),
            (context, Err(skip)) => (context, Err(skip)),
            (
                DateContext::DateSeen(date),
                Ok(ForecastRow::HourEntry {
                    time,
                    visibility_text,
                }),
            ) => (
                self,
                Ok(Some(Reading::new(date.and_time(time), visibility_text))),
            ),
            (DateContext::NoDateSeen, Ok(ForecastRow::HourEntry { time, .. })) => {
                (self, Err(RowSkip::NoDateContext(time)))
            }
        }
    }
}

/// Parses `markup` and extracts the readings of its forecast table.
///
/// The parsed document never outlives this call, so callers in async code do not hold the
/// (non-`Send`) tree across an await point.
pub fn extract_from_markup(
    markup: &str,
    layout: &TableLayout,
) -> Result<Vec<Reading>, ExtractionError> {
    let document = Html::parse_document(markup);
    extract_readings(&document, layout)
}

/// Extracts every dated hour reading from the forecast table of `document`.
///
/// # Errors
///
/// * [`ExtractionError::TableNotFound`] if nothing matches `layout.table_selector`.
/// * [`ExtractionError::InvalidSelector`] if `layout.table_selector` is not valid CSS.
pub fn extract_readings(
    document: &Html,
    layout: &TableLayout,
) -> Result<Vec<Reading>, ExtractionError> {
    let table_selector = parse_selector(&layout.table_selector)?;
    let row_selector = parse_selector("tr")?;
    let cell_selector = parse_selector("td")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ExtractionError::TableNotFound {
            selector: layout.table_selector.clone(),
        })?;

    let (_, readings) = table
        .select(&row_selector)
        .filter_map(|row| classify_row(row, &cell_selector, layout))
        .fold(
            (DateContext::default(), Vec::new()),
            |(context, mut readings), row| {
                let (next, outcome) = context.advance(row);
                match outcome {
                    Ok(Some(reading)) => readings.push(reading),
                    Ok(None) => {}
                    Err(skip) => debug!("Skipping forecast row: {}", skip),
                }
                (next, readings)
            },
        );

    info!("Extracted {} hourly readings from forecast table", readings.len());
    Ok(readings)
}

/// Classifies a `tr` element. Rows carrying neither marker class yield `None`.
fn classify_row(
    row: ElementRef<'_>,
    cell_selector: &Selector,
    layout: &TableLayout,
) -> Option<Result<ForecastRow, RowSkip>> {
    let has_class = |name: &str| row.value().classes().any(|class| class == name);

    if has_class(&layout.day_row_class) {
        let text = collapsed_text(row);
        Some(
            parse_date_header(&text, &layout.date_format)
                .map(ForecastRow::DateHeader)
                .ok_or(RowSkip::MalformedDate(text)),
        )
    } else if has_class(&layout.hour_row_class) {
        Some(classify_hour_row(row, cell_selector, layout))
    } else {
        None
    }
}

/// Parses a date header. A leading weekday (`%A` or `%a`) must be a weekday name but is not
/// checked against the date it precedes.
fn parse_date_header(text: &str, format: &str) -> Option<NaiveDate> {
    let dated_format = ["%A ", "%a "]
        .iter()
        .find_map(|prefix| format.strip_prefix(*prefix));

    match dated_format {
        Some(dated_format) => {
            let (weekday, date) = text.split_once(' ')?;
            weekday.parse::<Weekday>().ok()?;
            NaiveDate::parse_from_str(date, dated_format).ok()
        }
        None => NaiveDate::parse_from_str(text, format).ok(),
    }
}

fn classify_hour_row(
    row: ElementRef<'_>,
    cell_selector: &Selector,
    layout: &TableLayout,
) -> Result<ForecastRow, RowSkip> {
    let cells: Vec<ElementRef<'_>> = row.select(cell_selector).collect();
    if cells.len() < layout.min_cells() {
        return Err(RowSkip::TooFewCells {
            found: cells.len(),
            required: layout.min_cells(),
        });
    }

    let time_text = collapsed_text(cells[layout.time_column]);
    let time = NaiveTime::parse_from_str(&time_text, &layout.time_format)
        .map_err(|_| RowSkip::MalformedTime(time_text))?;

    Ok(ForecastRow::HourEntry {
        time,
        visibility_text: cells[layout.visibility_column]
            .text()
            .collect::<String>()
            .trim()
            .to_string(),
    })
}

/// Text content with surrounding whitespace trimmed and inner runs collapsed.
fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}
