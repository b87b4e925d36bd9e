//! Defines [`Visibility`], the meter value a free-text visibility reading normalizes to.

use serde::Serialize;
use std::fmt;

/// Meters reported for any "less than ..." reading.
pub const LESS_THAN_METERS: u32 = 1_000;
/// Meters reported for any "more than ..." reading.
pub const MORE_THAN_METERS: u32 = 10_000;
const METERS_PER_KM: u32 = 1_000;

/// A forecast visibility in meters.
///
/// The forecast page reports visibility as text: `"4 km"`, `"less than 1 km"` or
/// `"more than 10 km"`. Open-ended readings collapse to fixed sentinels
/// ([`LESS_THAN_METERS`] and [`MORE_THAN_METERS`]), plain kilometer readings are scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Visibility(pub u32);

impl Visibility {
    /// Attempts to normalize a raw visibility text into meters.
    ///
    /// The text is trimmed and lower-cased, then "less than" becomes `<` and "more than"
    /// becomes `>`. A `<` anywhere maps to 1000 m, otherwise a `>` maps to 10000 m,
    /// otherwise the first whitespace-separated token must be a whole number of kilometers.
    ///
    /// # Returns
    ///
    /// * `Some(Visibility)` for a recognised reading.
    /// * `None` if the first token is not a non-negative integer (or the text is empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use visibility_forecast::Visibility;
    ///
    /// assert_eq!(Visibility::from_text("Less than 1 km"), Some(Visibility(1000)));
    /// assert_eq!(Visibility::from_text("more than 10 km"), Some(Visibility(10000)));
    /// assert_eq!(Visibility::from_text(" 4 km "), Some(Visibility(4000)));
    /// assert_eq!(Visibility::from_text("n/a"), None);
    /// ```
    pub fn from_text(raw: &str) -> Option<Self> {
        let text = raw
            .trim()
            .to_lowercase()
            .replace("less than", "<")
            .replace("more than", ">");

        if text.contains('<') {
            return Some(Visibility(LESS_THAN_METERS));
        }
        if text.contains('>') {
            return Some(Visibility(MORE_THAN_METERS));
        }

        let km: u32 = text.split_whitespace().next()?.parse().ok()?;
        km.checked_mul(METERS_PER_KM).map(Visibility)
    }

    /// The value in meters.
    pub fn meters(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}
