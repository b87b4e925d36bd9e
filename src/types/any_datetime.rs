use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

const NAIVE_DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H%M%S",
    "%Y-%m-%dT%H%M",
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M",
];

/// Extended (`2024-01-01`) and basic (`20240101`) calendar dates.
const NAIVE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Anything that can be read as a forecast wall-clock time.
///
/// The forecast page lists local times without an offset, so values carrying an offset are
/// compared by their own wall clock (the offset is dropped, not converted).
pub trait AnyDateTime {
    fn get_naive_datetime(self) -> Option<NaiveDateTime>;
}

impl AnyDateTime for NaiveDateTime {
    fn get_naive_datetime(self) -> Option<NaiveDateTime> {
        Some(self)
    }
}

impl AnyDateTime for NaiveDate {
    fn get_naive_datetime(self) -> Option<NaiveDateTime> {
        self.and_hms_opt(0, 0, 0)
    }
}

impl<Tz: TimeZone> AnyDateTime for DateTime<Tz> {
    fn get_naive_datetime(self) -> Option<NaiveDateTime> {
        Some(self.naive_local())
    }
}

impl AnyDateTime for &str {
    fn get_naive_datetime(self) -> Option<NaiveDateTime> {
        let value = self.trim();
        // Try full RFC 3339 with offset
        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(value) {
            return dt.get_naive_datetime();
        }
        // Try naive datetime, with or without seconds
        if let Some(naive_dt) = NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        {
            return Some(naive_dt);
        }
        // Try date plus a bare hour, e.g. 2024-01-01T10
        if let Some(naive_dt) = NAIVE_DATE_FORMATS
            .iter()
            .find_map(|format| parse_date_and_hour(value, format))
        {
            return Some(naive_dt);
        }
        // Try naive date
        NAIVE_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
            .and_then(|naive_date| naive_date.get_naive_datetime())
    }
}

fn parse_date_and_hour(value: &str, date_format: &str) -> Option<NaiveDateTime> {
    let (date, rest) = NaiveDate::parse_and_remainder(value, date_format).ok()?;
    let hour = rest.strip_prefix(['T', ' '])?;
    if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    date.and_hms_opt(hour.parse().ok()?, 0, 0)
}

impl AnyDateTime for String {
    fn get_naive_datetime(self) -> Option<NaiveDateTime> {
        self.as_str().get_naive_datetime()
    }
}
