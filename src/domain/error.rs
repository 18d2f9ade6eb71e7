//! Error kinds raised by the contact domain

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid phone number")]
    InvalidPhoneFormat,

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat,

    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    #[error("Contact not found.")]
    ContactNotFound(String),

    #[error("Contact name cannot be empty")]
    EmptyName,
}
