//! Upcoming birthday calculation
//!
//! Given a directory and a reference date ("today"), finds every contact
//! whose next birthday falls within `[today, today + window]` and computes
//! the observed congratulation date.
//!
//! ## Rules
//!
//! - The next occurrence is the birthday in `today`'s year, or in the
//!   following year if that date has already passed.
//! - A Feb 29 birthday is observed on Mar 1 in non-leap years.
//! - Birthdays on a Saturday or Sunday are congratulated the following
//!   Monday. The shift is applied to the unshifted occurrence and does not
//!   affect whether a contact is inside the window.
//!
//! Results are sorted by observed date, then by name.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

use super::birthday::BirthdayDate;
use super::directory::Directory;

/// Default look-ahead window in days (inclusive of today)
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the date to do it on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(serialize_with = "serialize_congratulation_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `YYYY.MM.DD`
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

fn serialize_congratulation_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(CONGRATULATION_FORMAT))
}

/// Days to move a birthday forward so it lands on a weekday
pub fn weekend_shift(weekday: Weekday) -> u64 {
    match weekday {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    }
}

/// Applies the weekend-to-Monday shift to a date
pub fn observed_date(date: NaiveDate) -> NaiveDate {
    date + Days::new(weekend_shift(date.weekday()))
}

/// The birthday's date in `year`, rolling Feb 29 to Mar 1 in non-leap years
pub fn occurrence_in_year(birthday: &BirthdayDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// The first occurrence of the birthday on or after `today`
pub fn next_occurrence(birthday: &BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Birthdays within the default seven-day window
pub fn upcoming_birthdays(directory: &Directory, today: NaiveDate) -> Vec<UpcomingBirthday> {
    upcoming_birthdays_within(directory, today, DEFAULT_WINDOW_DAYS)
}

/// Birthdays whose next occurrence is `0..=window_days` days after `today`
pub fn upcoming_birthdays_within(
    directory: &Directory,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    let mut upcoming: Vec<UpcomingBirthday> = directory
        .records()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let occurrence = next_occurrence(birthday, today)?;
            let days_until = occurrence.signed_duration_since(today).num_days();

            if (0..=i64::from(window_days)).contains(&days_until) {
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: observed_date(occurrence),
                })
            } else {
                None
            }
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });
    upcoming
}
