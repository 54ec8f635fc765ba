//! Settings reconciliation
//!
//! Persisted container records are reconciled against compiled-in default
//! schemas into a single in-memory snapshot. The snapshot is rebuilt in full
//! after every successful save; there is no incremental update.

use crate::domain::{Record, SettingValue};
use crate::store::OptionStore;
use thiserror::Error;

pub mod keys;
pub mod schema;

pub use schema::{ContainerSchema, SchemaError, SettingsSchema};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("no settings container at index {index} ({count} registered)")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Settings service backed by an [`OptionStore`].
///
/// Built once per request or process and passed by reference to whatever
/// needs configuration.
pub struct Settings<S: OptionStore> {
    schema: SettingsSchema,
    store: S,
    snapshot: Record,
}

impl<S: OptionStore> Settings<S> {
    /// Create the service and load the snapshot from `store`.
    pub fn new(schema: SettingsSchema, store: S) -> Self {
        let mut settings = Self { schema, store, snapshot: Record::new() };
        settings.load_all();
        settings
    }

    pub fn schema(&self) -> &SettingsSchema {
        &self.schema
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn container_count(&self) -> usize {
        self.schema.container_count()
    }

    pub fn container_name(&self, index: usize) -> Result<&str, SettingsError> {
        self.container(index).map(ContainerSchema::name)
    }

    pub fn defaults(&self, index: usize) -> Result<&Record, SettingsError> {
        self.container(index).map(ContainerSchema::defaults)
    }

    fn container(&self, index: usize) -> Result<&ContainerSchema, SettingsError> {
        self.schema
            .container(index)
            .ok_or(SettingsError::IndexOutOfRange { index, count: self.schema.container_count() })
    }

    /// Rebuild the snapshot from every container in registration order.
    pub fn load_all(&mut self) {
        let mut snapshot = Record::new();
        for index in 0..self.schema.container_count() {
            if let Ok(record) = self.load(index) {
                snapshot.extend(record);
            }
        }
        tracing::debug!(keys = snapshot.len(), "settings snapshot rebuilt");
        self.snapshot = snapshot;
    }

    /// Reconcile one container's persisted record with its defaults.
    ///
    /// Every schema key is present in the result. Persisted values win over
    /// defaults, and persisted keys the schema does not know are dropped. A
    /// record that is missing, empty or unreadable yields the defaults.
    pub fn load(&self, index: usize) -> Result<Record, SettingsError> {
        let container = self.container(index)?;
        let defaults = container.defaults();

        let persisted = match self.store.read_record(container.name()) {
            Ok(Some(record)) if !record.is_empty() => record,
            Ok(_) => {
                tracing::debug!(container = container.name(), "no stored settings, using defaults");
                return Ok(defaults.clone());
            }
            Err(e) => {
                tracing::warn!(container = container.name(), "failed reading settings: {}", e);
                return Ok(defaults.clone());
            }
        };

        let dropped = persisted.keys().filter(|k| !defaults.contains_key(k.as_str())).count();
        if dropped > 0 {
            tracing::debug!(container = container.name(), dropped, "ignoring unknown stored keys");
        }

        Ok(defaults
            .iter()
            .map(|(key, default)| {
                let value = persisted.get(key).unwrap_or(default);
                (key.clone(), value.clone())
            })
            .collect())
    }

    /// Persist `new_values` verbatim as the container's record.
    ///
    /// Returns `Ok(false)` when the store rejects or fails the write; the
    /// snapshot is refreshed only on success.
    pub fn save(&mut self, index: usize, new_values: Record) -> Result<bool, SettingsError> {
        let name = self.container_name(index)?.to_string();
        match self.store.write_record(&name, &new_values) {
            Ok(true) => {
                self.load_all();
                Ok(true)
            }
            Ok(false) => {
                tracing::warn!(container = %name, "settings write was not applied");
                Ok(false)
            }
            Err(e) => {
                tracing::warn!(container = %name, "failed writing settings: {}", e);
                Ok(false)
            }
        }
    }

    /// Current value of `key`, or `None` when no schema defines it.
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.snapshot.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SettingValue::as_str)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(SettingValue::as_i64)
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(SettingValue::as_f64)
    }

    /// Checkbox and yes/no settings are stored as `"yes"` or `"checked"`
    /// when on.
    pub fn is_enabled(&self, key: &str) -> bool {
        matches!(self.get_str(key), Some("yes") | Some("checked"))
    }

    /// Hook priority level, `None` when the stored value is the unset
    /// sentinel or not a number.
    pub fn priority_level(&self, key: &str) -> Option<i64> {
        self.get_int(key).filter(|level| *level != keys::PRIORITY_LEVEL_UNSET)
    }

    /// The merged view of every known key.
    pub fn snapshot(&self) -> &Record {
        &self.snapshot
    }

    /// Delete every container record and fall back to raw defaults.
    pub fn clear_all(&mut self) {
        for container in self.schema.containers() {
            if let Err(e) = self.store.delete_record(container.name()) {
                tracing::warn!(container = container.name(), "failed deleting settings: {}", e);
            }
        }
        self.snapshot = self.schema.all_defaults();
    }

    /// Declare every container writable in the store.
    pub fn register_all(&mut self) {
        for container in self.schema.containers() {
            if let Err(e) = self.store.declare_writable(container.name()) {
                tracing::warn!(container = container.name(), "failed registering settings: {}", e);
            }
        }
    }
}
