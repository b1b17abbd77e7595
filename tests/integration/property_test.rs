use std::collections::HashSet;

use jsondb::common::value::DataValue;
use jsondb::query::executor::operators::{evaluate, paginate};
use jsondb::query::executor::pipeline::execute_select;
use jsondb::query::parser::ast::{ColumnReference, Expression, LimitClause, Operator, Projection, Value};
use jsondb::storage::{Record, RecordValue};
use jsondb::RecordId;
use proptest::prelude::*;

const COLUMNS: [&str; 3] = ["a", "b", "c"];

fn data_value() -> impl Strategy<Value = DataValue> {
    prop_oneof![
        Just(DataValue::Null),
        any::<bool>().prop_map(DataValue::Boolean),
        (-5i64..5).prop_map(DataValue::Integer),
        (-5.0f64..5.0).prop_map(DataValue::Float),
        prop::sample::select(vec!["", "0", "1", "x", "abc", "-2"])
            .prop_map(|s| DataValue::Text(s.to_string())),
    ]
}

fn literal() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        (-5i64..5).prop_map(Value::Integer),
        (-5.0f64..5.0).prop_map(Value::Float),
        prop::sample::select(vec!["", "0", "1", "x", "abc"]).prop_map(|s| Value::String(s.to_string())),
    ]
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![
        Operator::Equals,
        Operator::NotEquals,
        Operator::Is,
        Operator::IsNot,
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::LessEquals,
        Operator::GreaterEquals,
    ])
}

/// A record holding a random subset of the columns
fn record() -> impl Strategy<Value = Record> {
    prop::collection::vec(prop::option::of(data_value()), COLUMNS.len()).prop_map(|fields| {
        let mut value = RecordValue::new();
        for (column, field) in COLUMNS.iter().zip(fields) {
            if let Some(field) = field {
                value.insert(column.to_string(), field);
            }
        }
        Record::new(value)
    })
}

fn table() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record(), 0..25)
}

fn comparison() -> impl Strategy<Value = Expression> {
    (prop::sample::select(COLUMNS.to_vec()), operator(), literal())
        .prop_map(|(column, op, value)| Expression::compare(column, op, value))
}

fn expression() -> impl Strategy<Value = Expression> {
    comparison().prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expression::and(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Expression::or(l, r)),
        ]
    })
}

fn ids(records: &[&Record]) -> HashSet<RecordId> {
    records.iter().map(|r| r.id.clone()).collect()
}

fn id_list(records: &[&Record]) -> Vec<RecordId> {
    records.iter().map(|r| r.id.clone()).collect()
}

proptest! {
    #[test]
    fn filter_is_idempotent(records in table(), expr in expression()) {
        let once: Vec<Record> = evaluate(&records, &expr).into_iter().cloned().collect();
        let once_refs: Vec<&Record> = once.iter().collect();
        let twice = evaluate(&once, &expr);

        prop_assert_eq!(id_list(&twice), id_list(&once_refs));
    }

    #[test]
    fn filter_keeps_storage_order(records in table(), expr in expression()) {
        let selected = evaluate(&records, &expr);
        let positions: Vec<usize> = selected
            .iter()
            .filter_map(|s| records.iter().position(|r| r.id == s.id))
            .collect();

        prop_assert_eq!(positions.len(), selected.len());
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn and_is_intersection(records in table(), p in expression(), q in expression()) {
        let left = ids(&evaluate(&records, &p));
        let right = ids(&evaluate(&records, &q));
        let both = ids(&evaluate(&records, &Expression::and(p, q)));

        prop_assert_eq!(both, left.intersection(&right).cloned().collect::<HashSet<_>>());
    }

    #[test]
    fn or_is_union(records in table(), p in expression(), q in expression()) {
        let left = ids(&evaluate(&records, &p));
        let right = ids(&evaluate(&records, &q));
        let either = ids(&evaluate(&records, &Expression::or(p, q)));

        prop_assert_eq!(either, left.union(&right).cloned().collect::<HashSet<_>>());
    }

    #[test]
    fn projection_preserves_cardinality(
        records in table(),
        expr in proptest::option::of(expression()),
        columns in prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "missing"]), 1..4),
    ) {
        let projection = Projection::Columns(columns.iter().map(|c| ColumnReference::new(c)).collect());
        let rows = execute_select(&records, &projection, expr.as_ref(), &[], None);

        let expected = match &expr {
            Some(expr) => evaluate(&records, expr).len(),
            None => records.len(),
        };
        prop_assert_eq!(rows.len(), expected);
        for row in &rows {
            prop_assert!(row.columns().all(|c| columns.contains(&c.as_str())));
        }
    }

    #[test]
    fn pagination_is_bounded(n in 0usize..40, count in 0usize..50, offset in 0usize..50) {
        let items: Vec<usize> = (0..n).collect();
        let page = paginate(items, &LimitClause { count, offset });

        prop_assert_eq!(page.len(), count.min(n.saturating_sub(offset)));
        if let Some(first) = page.first() {
            prop_assert_eq!(*first, offset);
        }
    }
}
