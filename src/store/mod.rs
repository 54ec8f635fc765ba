//! Persistent option store (host side of the settings engine)
//!
//! One record per settings container, keyed by container name. The settings
//! engine only ever reads, writes or deletes whole records.

use crate::domain::Record;
use thiserror::Error;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("option store unavailable: {0}")]
    Unavailable(String),

    #[error("option store backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    #[error("malformed record '{name}': {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value option storage consumed by [`crate::settings::Settings`].
///
/// Writes are atomic per record and last-writer-wins; no locking is
/// performed across records.
pub trait OptionStore {
    /// Fetch the record stored under `name`. `Ok(None)` means nothing was
    /// ever saved (first run).
    fn read_record(&self, name: &str) -> Result<Option<Record>, StoreError>;

    /// Replace the record stored under `name`. Returns whether the write
    /// took effect.
    fn write_record(&mut self, name: &str, record: &Record) -> Result<bool, StoreError>;

    fn delete_record(&mut self, name: &str) -> Result<(), StoreError>;

    /// Declare `name` as a writable settings record.
    fn declare_writable(&mut self, name: &str) -> Result<(), StoreError>;
}

impl<T: OptionStore + ?Sized> OptionStore for &mut T {
    fn read_record(&self, name: &str) -> Result<Option<Record>, StoreError> {
        (**self).read_record(name)
    }

    fn write_record(&mut self, name: &str, record: &Record) -> Result<bool, StoreError> {
        (**self).write_record(name, record)
    }

    fn delete_record(&mut self, name: &str) -> Result<(), StoreError> {
        (**self).delete_record(name)
    }

    fn declare_writable(&mut self, name: &str) -> Result<(), StoreError> {
        (**self).declare_writable(name)
    }
}
