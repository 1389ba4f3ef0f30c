//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual format.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// chrono accepts single-digit days and months for `%d`/`%m`, so the field
/// widths are pinned down separately.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's birthday, kept as the `DD.MM.YYYY` string it was given.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Birthday;
///
/// let birthday = Birthday::new("17.03.1990").unwrap();
/// assert_eq!(birthday.as_str(), "17.03.1990");
/// assert_eq!(birthday.day_month(), "17.03");
/// assert!(Birthday::new("31.02.2024").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar date.
    ///
    /// The date is not checked against today; future dates are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the value is not two
    /// digits, a dot, two digits, a dot, four digits, or if it names a day
    /// that does not exist (`31.02.2024`, `00.01.2000`).
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let value: String = birthday.into();

        if !BIRTHDAY_SHAPE.is_match(&value) {
            return Err(ValidationError::InvalidDateFormat(value));
        }

        match NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT) {
            Ok(_) => Ok(Self(value)),
            Err(_) => Err(ValidationError::InvalidDateFormat(value)),
        }
    }

    /// Get the birthday as the original `DD.MM.YYYY` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `DD.MM` prefix used by the upcoming-birthday window.
    pub fn day_month(&self) -> &str {
        // Shape is validated as ASCII, so the first five bytes are `DD.MM`.
        self.0.get(..5).unwrap_or(self.0.as_str())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
