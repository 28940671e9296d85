//! redb-based record store
//!
//! All persisted state lives in a single key/value table of JSON blobs
//! under fixed string keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | `corehr_users` | credential table: email -> { password_hash, user } |
//! | `corehr_token` | current session token |
//! | `corehr_user` | current session user |
//! | `corehr_employees` | employee list (JSON array) |
//!
//! Every mutation re-serializes the whole blob for its key. List sizes are
//! demo-scale (single-digit to low-hundreds records), so whole-blob writes
//! are cheaper than maintaining per-record tables.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default: once `commit()`
//! returns, the write survives process death, and the file is always in a
//! consistent state (copy-on-write with atomic pointer swap).

pub mod repository;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// The single record table: key = storage key, value = JSON blob
const RECORDS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("records");

/// Credential table blob (email -> { password_hash, user })
pub const USERS_KEY: &str = "corehr_users";
/// Current session token
pub const SESSION_TOKEN_KEY: &str = "corehr_token";
/// Current session user
pub const SESSION_USER_KEY: &str = "corehr_user";
/// Employee list blob
pub const EMPLOYEES_KEY: &str = "corehr_employees";

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store backed by redb
///
/// Cheap to clone (`Arc<Database>` inside); every service holds its own
/// handle.
#[derive(Clone)]
pub struct RecordStore {
    db: Arc<Database>,
}

impl RecordStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests and demos)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RECORDS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Read and deserialize the blob under `key`, `None` if absent
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RECORDS_TABLE)?;
        match table.get(key)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` and overwrite the blob under `key`
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove the blob under `key` (absent key is fine)
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove several keys in one transaction
    ///
    /// Used by logout so the token and user blobs disappear together.
    pub fn remove_all(&self, keys: &[&str]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            for key in keys {
                table.remove(*key)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_json_blob() {
        let store = RecordStore::open_in_memory().unwrap();
        assert!(store.get_json::<Vec<String>>("missing").unwrap().is_none());

        let value = vec!["a".to_string(), "b".to_string()];
        store.put_json("key", &value).unwrap();
        let loaded: Vec<String> = store.get_json("key").unwrap().unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn overwrite_replaces_blob() {
        let store = RecordStore::open_in_memory().unwrap();
        store.put_json("key", &1u32).unwrap();
        store.put_json("key", &2u32).unwrap();
        assert_eq!(store.get_json::<u32>("key").unwrap(), Some(2));
    }

    #[test]
    fn remove_all_clears_every_key() {
        let store = RecordStore::open_in_memory().unwrap();
        store.put_json(SESSION_TOKEN_KEY, &"tok").unwrap();
        store.put_json(SESSION_USER_KEY, &"user").unwrap();
        store
            .remove_all(&[SESSION_TOKEN_KEY, SESSION_USER_KEY])
            .unwrap();
        assert!(
            store
                .get_json::<String>(SESSION_TOKEN_KEY)
                .unwrap()
                .is_none()
        );
        assert!(
            store
                .get_json::<String>(SESSION_USER_KEY)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corehr.redb");
        {
            let store = RecordStore::open(&path).unwrap();
            store.put_json("key", &42u32).unwrap();
        }
        let store = RecordStore::open(&path).unwrap();
        assert_eq!(store.get_json::<u32>("key").unwrap(), Some(42));
    }
}
