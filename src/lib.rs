//! Contact Book - an in-memory contact directory with upcoming birthdays
//!
//! Contacts carry validated ten-digit phone numbers and an optional
//! birthday. The birthday calculator reports who to congratulate in the
//! coming week, moving weekend birthdays to the following Monday.

pub mod domain;
pub mod config;
pub mod cli;

pub use domain::{
    upcoming_birthdays, BirthdayDate, ContactError, ContactRecord, Directory, PhoneNumber,
    UpcomingBirthday,
};
