// Storage Module
//
// Persistence for tables and the catalog. Tables are read and written as a
// whole: the query layer loads every record, transforms the sequence and
// hands it back to be saved.

pub mod error;
pub mod json_store;
pub mod lock;
pub mod memory_store;
pub mod record;

pub use self::error::{StorageError, StorageResult};
pub use self::json_store::{JsonStore, JsonStoreConfig};
pub use self::lock::TableLocks;
pub use self::memory_store::MemoryStore;
pub use self::record::{Record, RecordValue};

use crate::catalog::Catalog;

/// Backing store for table documents and the catalog document
pub trait Storage: Send + Sync {
    /// Load every record of a table in storage order
    fn load_table(&self, table_name: &str) -> StorageResult<Vec<Record>>;

    /// Replace the contents of a table, creating it if needed
    fn save_table(&self, table_name: &str, records: &[Record]) -> StorageResult<()>;

    /// Remove a table. Fails with `TableNotFound` if it does not exist.
    fn delete_table(&self, table_name: &str) -> StorageResult<()>;

    fn table_exists(&self, table_name: &str) -> bool;

    /// Load the catalog, empty if none has been saved yet
    fn load_catalog(&self) -> StorageResult<Catalog>;

    fn save_catalog(&self, catalog: &Catalog) -> StorageResult<()>;
}

/// Reject names that are empty, hidden, or would escape the data directory
pub fn validate_table_name(table_name: &str) -> StorageResult<()> {
    let invalid = table_name.is_empty()
        || table_name.starts_with('.')
        || table_name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(StorageError::InvalidTableName(table_name.to_string()));
    }
    Ok(())
}
