// In-Memory Store
//
// Same contract as the JSON store without touching disk. Used by tests,
// benchmarks and embedders that do not need persistence.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::error::{StorageError, StorageResult};
use super::record::Record;
use super::{validate_table_name, Storage};
use crate::catalog::Catalog;

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<Record>>>,
    catalog: RwLock<Catalog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn load_table(&self, table_name: &str) -> StorageResult<Vec<Record>> {
        validate_table_name(table_name)?;
        self.tables
            .read()
            .get(table_name)
            .cloned()
            .ok_or_else(|| StorageError::TableNotFound(table_name.to_string()))
    }

    fn save_table(&self, table_name: &str, records: &[Record]) -> StorageResult<()> {
        validate_table_name(table_name)?;
        self.tables
            .write()
            .insert(table_name.to_string(), records.to_vec());
        Ok(())
    }

    fn delete_table(&self, table_name: &str) -> StorageResult<()> {
        validate_table_name(table_name)?;
        self.tables
            .write()
            .remove(table_name)
            .map(|_| ())
            .ok_or_else(|| StorageError::TableNotFound(table_name.to_string()))
    }

    fn table_exists(&self, table_name: &str) -> bool {
        self.tables.read().contains_key(table_name)
    }

    fn load_catalog(&self) -> StorageResult<Catalog> {
        Ok(self.catalog.read().clone())
    }

    fn save_catalog(&self, catalog: &Catalog) -> StorageResult<()> {
        *self.catalog.write() = catalog.clone();
        Ok(())
    }
}
