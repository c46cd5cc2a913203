use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use consts::RIVALS_STORE_TABLE;
use redb::{Database, ReadableTable, TableDefinition};
use thiserror::Error;

const STORE_TABLE: TableDefinition<&str, &str> = TableDefinition::new(RIVALS_STORE_TABLE);

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(#[from] redb::Error),
}

impl From<redb::DatabaseError> for StorageError {
    fn from(e: redb::DatabaseError) -> Self {
        Self::Backend(e.into())
    }
}

impl From<redb::TransactionError> for StorageError {
    fn from(e: redb::TransactionError) -> Self {
        Self::Backend(e.into())
    }
}

impl From<redb::TableError> for StorageError {
    fn from(e: redb::TableError) -> Self {
        Self::Backend(e.into())
    }
}

impl From<redb::StorageError> for StorageError {
    fn from(e: redb::StorageError) -> Self {
        Self::Backend(e.into())
    }
}

impl From<redb::CommitError> for StorageError {
    fn from(e: redb::CommitError) -> Self {
        Self::Backend(e.into())
    }
}

/// String key-value slot storage, local to this installation.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path)?;
        Ok(Self { db })
    }
}

impl KvStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let read_txn = self.db.begin_read()?;
        let table = match read_txn.open_table(STORE_TABLE) {
            Ok(table) => table,
            // nothing has been written yet
            Err(redb::TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STORE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STORE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
