//! Domain models for the contact book
//!
//! Contains the core business logic without any I/O concerns.

mod error;
mod phone;
mod birthday;
mod record;
mod directory;
mod upcoming;

pub use error::ContactError;
pub use phone::PhoneNumber;
pub use birthday::BirthdayDate;
pub use record::ContactRecord;
pub use directory::Directory;
pub use upcoming::{
    next_occurrence, observed_date, occurrence_in_year, upcoming_birthdays,
    upcoming_birthdays_within, weekend_shift, UpcomingBirthday, DEFAULT_WINDOW_DAYS,
};
