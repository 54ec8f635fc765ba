//! SQLite-backed option store.
//!
//! Mirrors a host options table: one row per container, the record kept as a
//! JSON object so key order survives a round trip.

use crate::domain::Record;
use crate::store::{OptionStore, StoreError};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

pub const SCHEMA_VERSION: i64 = 1;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS options (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS registered_settings (
                name TEXT PRIMARY KEY
            );
            ",
        )?;

        let current: Option<i64> = conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| row.get(0))
            .optional()?;
        match current {
            None => {
                conn.execute("INSERT INTO schema_version(version) VALUES(?1)", [SCHEMA_VERSION])?;
            }
            Some(version) if version == SCHEMA_VERSION => {}
            Some(version) => {
                return Err(StoreError::Unavailable(format!(
                    "unsupported option store schema version {version}; expected {SCHEMA_VERSION}"
                )));
            }
        }
        Ok(Self { conn })
    }

    /// Names declared writable so far, in name order.
    pub fn registered(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT name FROM registered_settings ORDER BY name")?;
        let names = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }
}

impl OptionStore for SqliteStore {
    fn read_record(&self, name: &str) -> Result<Option<Record>, StoreError> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM options WHERE name = ?1", params![name], |row| row.get(0))
            .optional()?;
        match raw {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|source| StoreError::Malformed { name: name.to_string(), source }),
        }
    }

    fn write_record(&mut self, name: &str, record: &Record) -> Result<bool, StoreError> {
        let json = serde_json::to_string(record)
            .map_err(|source| StoreError::Malformed { name: name.to_string(), source })?;
        let changed = self.conn.execute(
            "INSERT OR REPLACE INTO options(name, value) VALUES(?1, ?2)",
            params![name, json],
        )?;
        Ok(changed > 0)
    }

    fn delete_record(&mut self, name: &str) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM options WHERE name = ?1", params![name])?;
        Ok(())
    }

    fn declare_writable(&mut self, name: &str) -> Result<(), StoreError> {
        self.conn
            .execute("INSERT OR IGNORE INTO registered_settings(name) VALUES(?1)", params![name])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SettingValue;
    use tempfile::TempDir;

    fn sample() -> Record {
        let mut record = Record::new();
        record.insert("z_last".to_string(), SettingValue::text("yes"));
        record.insert("a_first".to_string(), SettingValue::Integer(380));
        record.insert("scalar".to_string(), SettingValue::Float(13.5));
        record
    }

    #[test]
    fn record_round_trips_with_order() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        assert!(store.write_record("footnotes_storage", &sample()).expect("write"));

        let loaded = store.read_record("footnotes_storage").expect("read").expect("present");
        assert_eq!(loaded, sample());
        let keys: Vec<&str> = loaded.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z_last", "a_first", "scalar"]);
    }

    #[test]
    fn records_persist_across_reopen() {
        let tmp = TempDir::new().expect("temp dir");
        let db = tmp.path().join("options.db");
        {
            let mut store = SqliteStore::open(&db).expect("open");
            store.write_record("c", &sample()).expect("write");
            store.declare_writable("c").expect("declare");
        }
        let store = SqliteStore::open(&db).expect("reopen");
        assert_eq!(store.read_record("c").expect("read"), Some(sample()));
        assert_eq!(store.registered().expect("registered"), vec!["c".to_string()]);
    }

    #[test]
    fn delete_makes_record_absent() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        store.write_record("c", &sample()).expect("write");
        store.delete_record("c").expect("delete");
        assert_eq!(store.read_record("c").expect("read"), None);
    }

    #[test]
    fn malformed_value_is_reported() {
        let store = SqliteStore::open_in_memory().expect("open");
        store
            .conn
            .execute("INSERT INTO options(name, value) VALUES('bad', 'not json')", [])
            .expect("seed");
        let err = store.read_record("bad").expect_err("must fail");
        assert!(err.to_string().contains("malformed record 'bad'"));
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let tmp = TempDir::new().expect("temp dir");
        let db = tmp.path().join("options.db");
        let conn = Connection::open(&db).expect("open db");
        conn.execute_batch(
            "CREATE TABLE schema_version(version INTEGER NOT NULL);\
             INSERT INTO schema_version(version) VALUES(999);",
        )
        .expect("seed schema version");
        drop(conn);

        let err = SqliteStore::open(&db).err().expect("must fail on mismatched schema version");
        assert!(err.to_string().contains("unsupported option store schema version 999"));
    }
}
