//! Phone numbers
//!
//! A phone number is exactly ten ASCII digits. Separators, country
//! prefixes and whitespace are rejected rather than stripped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ContactError;

const PHONE_LEN: usize = 10;

/// Validated ten-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(text: &str) -> Result<Self, ContactError> {
        if text.len() != PHONE_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContactError::InvalidPhoneFormat);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digits() {
        for text in ["1234567890", "0000000000", "9876543210"] {
            let phone = PhoneNumber::new(text).unwrap();
            assert_eq!(phone.as_str(), text);
            assert_eq!(phone.to_string(), text);
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(PhoneNumber::new(""), Err(ContactError::InvalidPhoneFormat));
        assert_eq!(
            PhoneNumber::new("123456789"),
            Err(ContactError::InvalidPhoneFormat)
        );
        assert_eq!(
            PhoneNumber::new("12345678901"),
            Err(ContactError::InvalidPhoneFormat)
        );
    }

    #[test]
    fn rejects_non_digits_without_normalizing() {
        for text in [
            "123-456-78",
            "+380501234",
            "12345 6789",
            "abcdefghij",
            " 123456789",
            "١٢٣٤٥٦٧٨٩٠",
        ] {
            assert_eq!(
                PhoneNumber::new(text),
                Err(ContactError::InvalidPhoneFormat),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn parses_via_from_str() {
        let phone: PhoneNumber = "1112223333".parse().unwrap();
        assert_eq!(phone.as_str(), "1112223333");
        assert!("111".parse::<PhoneNumber>().is_err());
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let phone: PhoneNumber = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"1234567890\"");
        assert!(serde_json::from_str::<PhoneNumber>("\"12-34\"").is_err());
    }
}
