//! Table Definitions
//!
//! A table definition is the ordered mapping of column name to declared type.

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};

use super::schema::DataType;

/// Column layout of a table, in declaration order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    columns: LinkedHashMap<String, DataType>,
}

impl Table {
    /// Create a table definition from columns in declaration order.
    /// A repeated column name keeps its first position and the last type.
    pub fn new(columns: Vec<(String, DataType)>) -> Self {
        let mut map = LinkedHashMap::new();
        for (name, data_type) in columns {
            if let Some(existing) = map.get_mut(&name) {
                *existing = data_type;
            } else {
                map.insert(name, data_type);
            }
        }
        Table { columns: map }
    }

    /// Column names in declaration order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.keys().cloned().collect()
    }

    /// Iterate over (name, type) pairs in declaration order
    pub fn columns(&self) -> impl Iterator<Item = (&String, &DataType)> {
        self.columns.iter()
    }

    pub fn get_column_type(&self, name: &str) -> Option<DataType> {
        self.columns.get(name).cloned()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
