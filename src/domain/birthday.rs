//! Birthday dates
//!
//! Birthdays are accepted only in the strict `DD.MM.YYYY` form and are
//! stored as a calendar date, so presentation is a pure formatting step.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ContactError;

const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Validated birthday (no time-of-day component)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    pub fn new(text: &str) -> Result<Self, ContactError> {
        let bytes = text.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
            return Err(ContactError::InvalidDateFormat);
        }

        let digits_ok = bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2 && *i != 5)
            .all(|(_, b)| b.is_ascii_digit());
        if !digits_ok {
            return Err(ContactError::InvalidDateFormat);
        }

        let date = NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map_err(|_| ContactError::InvalidDateFormat)?;

        // Calendar years start at 1
        if date.year() < 1 {
            return Err(ContactError::InvalidDateFormat);
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for BirthdayDate {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BirthdayDate {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<BirthdayDate> for String {
    fn from(birthday: BirthdayDate) -> Self {
        birthday.to_string()
    }
}
