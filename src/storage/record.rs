// Record Representation
//
// A record is one element of a table document: an identifier plus the
// column values written to it.

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};

use crate::common::types::RecordId;
use crate::common::value::DataValue;

/// Column name to value, in the order the columns were first written
pub type RecordValue = LinkedHashMap<String, DataValue>;

/// A stored record
///
/// The key set of `value` need not match the table's declared columns. A
/// column missing from `value` is absent, which is different from null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier assigned at insert time
    #[serde(alias = "ulid")]
    pub id: RecordId,
    /// Field values
    pub value: RecordValue,
}

impl Record {
    /// Create a record with a freshly generated identifier
    pub fn new(value: RecordValue) -> Self {
        Record {
            id: RecordId::generate(),
            value,
        }
    }

    /// Create a record with a known identifier
    pub fn with_id(id: RecordId, value: RecordValue) -> Self {
        Record { id, value }
    }

    /// Get a field, `None` when the column is absent
    pub fn get(&self, column: &str) -> Option<&DataValue> {
        self.value.get(column)
    }

    /// Set a field. An existing column keeps its position; a new one is
    /// appended.
    pub fn set(&mut self, column: &str, value: DataValue) {
        if let Some(existing) = self.value.get_mut(column) {
            *existing = value;
        } else {
            self.value.insert(column.to_string(), value);
        }
    }
}
