use crate::types::visibility::Visibility;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A classified row of the forecast table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastRow {
    /// A row whose only content is the calendar date for the hour rows below it.
    DateHeader(NaiveDate),
    /// One hour of forecast: the time of day and the raw visibility cell.
    HourEntry {
        time: NaiveTime,
        visibility_text: String,
    },
}

/// An hour row resolved against its governing date header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    /// Text of the visibility cell with only surrounding whitespace trimmed.
    pub visibility_text: String,
}

impl Reading {
    pub fn new(timestamp: NaiveDateTime, visibility_text: impl Into<String>) -> Self {
        Self {
            timestamp,
            visibility_text: visibility_text.into(),
        }
    }
}

/// A [`Reading`] whose text normalized successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourlyVisibility {
    pub timestamp: NaiveDateTime,
    pub visibility: Visibility,
}
