//! Contact record domain model
//!
//! A record owns one immutable name, an ordered list of phone numbers and
//! at most one birthday. Records start empty and are filled incrementally.

use serde::Serialize;
use std::fmt;

use super::birthday::BirthdayDate;
use super::error::ContactError;
use super::phone::PhoneNumber;

/// One contact in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    name: String,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Creates a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Result<Self, ContactError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validates and appends a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, text: &str) -> Result<&PhoneNumber, ContactError> {
        let phone = PhoneNumber::new(text)?;
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ContactError> {
        let index = self
            .position(old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Removes the first phone equal to `text`
    pub fn remove_phone(&mut self, text: &str) -> Result<PhoneNumber, ContactError> {
        let index = self
            .position(text)
            .ok_or_else(|| ContactError::PhoneNotFound(text.to_string()))?;
        Ok(self.phones.remove(index))
    }

    pub fn find_phone(&self, text: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == text)
    }

    /// Validates and stores the birthday, overwriting any previous one
    pub fn set_birthday(&mut self, text: &str) -> Result<&BirthdayDate, ContactError> {
        let birthday: &BirthdayDate = self.birthday.insert(BirthdayDate::new(text)?);
        Ok(birthday)
    }

    fn position(&self, text: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == text)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
