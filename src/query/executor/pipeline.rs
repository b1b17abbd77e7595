// SELECT Pipeline
//
// Filter, order, project and paginate, always in that order.

use log::debug;

use crate::query::executor::operators::{evaluate, paginate, project, sort_records};
use crate::query::executor::result::Row;
use crate::query::parser::ast::{Expression, LimitClause, OrderByExpr, Projection};
use crate::storage::Record;

/// Run a SELECT over a loaded table.
///
/// `SELECT *` returns every record's fields as stored and ignores WHERE,
/// ORDER BY and LIMIT.
pub fn execute_select(
    records: &[Record],
    columns: &Projection,
    where_clause: Option<&Expression>,
    order_by: &[OrderByExpr],
    limit: Option<&LimitClause>,
) -> Vec<Row> {
    let column_refs = match columns {
        Projection::Wildcard => {
            if where_clause.is_some() || !order_by.is_empty() || limit.is_some() {
                debug!("SELECT * returns all records, ignoring WHERE, ORDER BY and LIMIT");
            }
            return records
                .iter()
                .map(|record| Row::from_map(record.value.clone()))
                .collect();
        }
        Projection::Columns(column_refs) => column_refs,
    };

    let mut selected = match where_clause {
        Some(expr) => evaluate(records, expr),
        None => records.iter().collect(),
    };
    debug!("{} of {} records selected", selected.len(), records.len());

    sort_records(&mut selected, order_by);

    let rows: Vec<Row> = selected
        .into_iter()
        .map(|record| project(record, column_refs))
        .collect();

    match limit {
        Some(limit) => paginate(rows, limit),
        None => rows,
    }
}
