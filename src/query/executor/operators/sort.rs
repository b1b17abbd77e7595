use std::cmp::Ordering;

use crate::common::value::compare_for_sort;
use crate::query::parser::ast::{OrderByExpr, SortDirection};
use crate::storage::Record;

/// Stable sort of `records` by the ORDER BY keys, earlier keys first.
///
/// `ASC` puts larger values first and `DESC` smaller values first. Records
/// missing the column come last in either direction.
pub fn sort_records(records: &mut [&Record], order_by: &[OrderByExpr]) {
    if order_by.is_empty() {
        return;
    }
    records.sort_by(|a, b| compare_records(a, b, order_by));
}

fn compare_records(a: &Record, b: &Record, order_by: &[OrderByExpr]) -> Ordering {
    for key in order_by {
        let ordering = match (a.get(&key.column.name), b.get(&key.column.name)) {
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (left, right) => {
                let natural = compare_for_sort(left, right);
                match key.direction {
                    SortDirection::Asc => natural.reverse(),
                    SortDirection::Desc => natural,
                }
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
