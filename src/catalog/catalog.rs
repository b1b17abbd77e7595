// Catalog
//
// The catalog maps each table name to its column definitions. It is loaded
// from and saved to storage as a whole around every DDL statement.

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};

use super::table::Table;

/// Every table known to the database, in creation order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    tables: LinkedHashMap<String, Table>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table, returning the definition it replaced if the name
    /// was already taken
    pub fn create_table(&mut self, name: &str, table: Table) -> Option<Table> {
        if let Some(existing) = self.tables.get_mut(name) {
            return Some(std::mem::replace(existing, table));
        }
        self.tables.insert(name.to_string(), table);
        None
    }

    /// Remove a table definition
    pub fn drop_table(&mut self, name: &str) -> Option<Table> {
        self.tables.remove(name)
    }

    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn table_exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Table names in creation order
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Declared column names of a table, empty when the table is unknown
    pub fn column_names(&self, table_name: &str) -> Vec<String> {
        self.tables
            .get(table_name)
            .map(Table::column_names)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
