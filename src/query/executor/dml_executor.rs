// DML Executor
//
// Applies INSERT, UPDATE and DELETE to a loaded table. The caller persists
// the result.

use crate::query::executor::type_conversion::literal_to_data_value;
use crate::query::parser::ast::{Assignment, Value};
use crate::storage::{Record, RecordValue};

/// Append one record per tuple, pairing literals with `columns` by position.
///
/// Columns without a literal stay absent and literals without a column are
/// dropped. Returns the number of records appended.
pub fn insert_rows(records: &mut Vec<Record>, columns: &[String], tuples: &[Vec<Value>]) -> usize {
    for tuple in tuples {
        let mut value = RecordValue::new();
        for (column, literal) in columns.iter().zip(tuple) {
            if let Some(existing) = value.get_mut(column) {
                *existing = literal_to_data_value(literal);
            } else {
                value.insert(column.clone(), literal_to_data_value(literal));
            }
        }
        records.push(Record::new(value));
    }
    tuples.len()
}

/// Apply every assignment to every record. Identifiers are untouched.
/// Returns the number of records updated.
pub fn update_all(records: &mut [Record], assignments: &[Assignment]) -> usize {
    for record in records.iter_mut() {
        for assignment in assignments {
            record.set(&assignment.column, literal_to_data_value(&assignment.value));
        }
    }
    records.len()
}

/// Remove every record. Returns the number removed.
pub fn delete_all(records: &mut Vec<Record>) -> usize {
    let removed = records.len();
    records.clear();
    removed
}
