// Predicate Evaluation
//
// Evaluates a WHERE expression against a table. Every node is evaluated
// against the full input slice: AND intersects and OR unions the identifier
// sets of its two children, then the input is filtered by membership, so the
// result always keeps storage order and never repeats a record.

use std::collections::HashSet;

use log::warn;

use crate::common::types::RecordId;
use crate::common::value::{
    field_greater_than, field_less_than, field_loose_equals, field_strict_equals, DataValue,
};
use crate::query::executor::type_conversion::literal_to_data_value;
use crate::query::parser::ast::{Expression, LogicalOperator, Operator};
use crate::storage::Record;

type FieldPredicate = fn(Option<&DataValue>, &DataValue) -> bool;

/// Return the records matching `expr`, in their original order
pub fn evaluate<'a>(records: &'a [Record], expr: &Expression) -> Vec<&'a Record> {
    match expr {
        Expression::Comparison { column, op, value } => {
            evaluate_comparison(records, &column.name, *op, &literal_to_data_value(value))
        }
        Expression::Logical { left, op, right } => {
            let left_ids = matching_ids(records, left);
            let right_ids = matching_ids(records, right);

            let keep: HashSet<&RecordId> = match op {
                LogicalOperator::And => left_ids.intersection(&right_ids).copied().collect(),
                LogicalOperator::Or => left_ids.union(&right_ids).copied().collect(),
            };

            records.iter().filter(|r| keep.contains(&r.id)).collect()
        }
    }
}

fn matching_ids<'a>(records: &'a [Record], expr: &Expression) -> HashSet<&'a RecordId> {
    evaluate(records, expr).into_iter().map(|r| &r.id).collect()
}

fn evaluate_comparison<'a>(
    records: &'a [Record],
    column: &str,
    op: Operator,
    literal: &DataValue,
) -> Vec<&'a Record> {
    let predicate: FieldPredicate = match op {
        Operator::Equals => field_strict_equals,
        Operator::NotEquals => |field, lit| !field_strict_equals(field, lit),
        Operator::Is => field_loose_equals,
        Operator::IsNot => |field, lit| !field_loose_equals(field, lit),
        Operator::GreaterThan => field_greater_than,
        Operator::LessThan => field_less_than,
        Operator::GreaterEquals | Operator::LessEquals => {
            // Not evaluated: the comparison matches nothing
            warn!(
                "Operator '{}' on column '{}' is not supported, no records match",
                op, column
            );
            return Vec::new();
        }
    };

    records
        .iter()
        .filter(|record| predicate(record.get(column), literal))
        .collect()
}
