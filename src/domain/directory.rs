//! In-memory contact directory keyed by name

use std::collections::BTreeMap;

use super::error::ContactError;
use super::record::ContactRecord;

/// Name-keyed collection of contact records
///
/// Names are unique. Enumeration is ordered by name so listings and the
/// birthday scan are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: BTreeMap<String, ContactRecord>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record under its name, returning the record it replaced
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        self.records.insert(record.name().to_string(), record)
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<ContactRecord, ContactError> {
        self.records
            .remove(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
    }

    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> ContactRecord {
        let mut record = ContactRecord::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn add_and_find() {
        let mut book = Directory::new();
        assert!(book.add_record(record("John", "1234567890")).is_none());

        let found = book.find("John").unwrap();
        assert_eq!(found.phones()[0].as_str(), "1234567890");
        assert!(book.find("Jane").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn add_record_upserts_by_name() {
        let mut book = Directory::new();
        book.add_record(record("John", "1234567890"));
        let replaced = book.add_record(record("John", "5555555555")).unwrap();

        assert_eq!(replaced.phones()[0].as_str(), "1234567890");
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut book = Directory::new();
        book.add_record(record("John", "1234567890"));

        book.find_mut("John").unwrap().add_phone("1112223333").unwrap();
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn delete_removes_entry() {
        let mut book = Directory::new();
        book.add_record(record("John", "1234567890"));

        let removed = book.delete("John").unwrap();
        assert_eq!(removed.name(), "John");
        assert!(book.is_empty());
    }

    #[test]
    fn delete_missing_fails() {
        let mut book = Directory::new();
        book.add_record(record("John", "1234567890"));

        assert_eq!(
            book.delete("Jane"),
            Err(ContactError::ContactNotFound("Jane".to_string()))
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn records_enumerates_all_by_name() {
        let mut book = Directory::new();
        book.add_record(record("Jim", "1112223333"));
        book.add_record(record("Jane", "9876543210"));
        book.add_record(record("John", "1234567890"));

        let names: Vec<&str> = book.records().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Jane", "Jim", "John"]);
    }
}
