// Projection
//
// Narrows a record to the requested columns, in the requested order.

use crate::query::executor::result::Row;
use crate::query::parser::ast::ColumnReference;
use crate::storage::Record;

/// Build a row holding only `columns`. Columns the record lacks stay absent.
pub fn project(record: &Record, columns: &[ColumnReference]) -> Row {
    let mut row = Row::new();
    for column in columns {
        if let Some(value) = record.get(&column.name) {
            row.set(column.name.clone(), value.clone());
        }
    }
    row
}
