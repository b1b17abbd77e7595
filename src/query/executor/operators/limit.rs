use crate::query::parser::ast::LimitClause;

/// Keep `count` items starting at `offset`. Ranges past the end are
/// truncated, never an error.
pub fn paginate<T>(items: Vec<T>, limit: &LimitClause) -> Vec<T> {
    items
        .into_iter()
        .skip(limit.offset)
        .take(limit.count)
        .collect()
}
