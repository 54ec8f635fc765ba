//! In-process option store

use crate::domain::Record;
use crate::store::{OptionStore, StoreError};
use indexmap::{IndexMap, IndexSet};

/// Option store held entirely in memory. Useful for embedding hosts that
/// persist elsewhere, and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: IndexMap<String, Record>,
    writable: IndexSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record without going through the settings engine.
    pub fn with_record(mut self, name: &str, record: Record) -> Self {
        self.records.insert(name.to_string(), record);
        self
    }

    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn is_writable(&self, name: &str) -> bool {
        self.writable.contains(name)
    }

    pub fn writable_names(&self) -> impl Iterator<Item = &str> {
        self.writable.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl OptionStore for MemoryStore {
    fn read_record(&self, name: &str) -> Result<Option<Record>, StoreError> {
        Ok(self.records.get(name).cloned())
    }

    fn write_record(&mut self, name: &str, record: &Record) -> Result<bool, StoreError> {
        self.records.insert(name.to_string(), record.clone());
        Ok(true)
    }

    fn delete_record(&mut self, name: &str) -> Result<(), StoreError> {
        self.records.shift_remove(name);
        Ok(())
    }

    fn declare_writable(&mut self, name: &str) -> Result<(), StoreError> {
        self.writable.insert(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SettingValue;

    #[test]
    fn write_then_read_returns_record_verbatim() {
        let mut store = MemoryStore::new();
        let mut record = Record::new();
        record.insert("b".to_string(), SettingValue::Integer(1));
        record.insert("a".to_string(), SettingValue::text("x"));

        assert!(store.write_record("c", &record).expect("write"));
        assert_eq!(store.read_record("c").expect("read"), Some(record));
        assert_eq!(store.read_record("missing").expect("read"), None);
    }

    #[test]
    fn delete_removes_only_named_record() {
        let mut store = MemoryStore::new()
            .with_record("one", Record::new())
            .with_record("two", Record::new());
        store.delete_record("one").expect("delete");
        assert!(store.record("one").is_none());
        assert!(store.record("two").is_some());
    }

    #[test]
    fn declare_writable_is_idempotent() {
        let mut store = MemoryStore::new();
        store.declare_writable("x").expect("declare");
        store.declare_writable("x").expect("declare");
        assert_eq!(store.writable_names().count(), 1);
        assert!(store.is_writable("x"));
    }
}
