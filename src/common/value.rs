// Scalar Values
//
// This module defines the scalars stored in record fields together with the
// comparison semantics used by WHERE and ORDER BY.
//
// Fields follow the loosely-typed rules of the script engines the on-disk
// format was designed around: `=` is strict, `IS` coerces, and relational
// operators compare strings lexicographically and everything else numerically.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar held by a record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl DataValue {
    /// Whether the value is an integer or a float
    pub fn is_number(&self) -> bool {
        matches!(self, DataValue::Integer(_) | DataValue::Float(_))
    }

    /// Numeric conversion: null is 0, booleans are 0/1, text is parsed and
    /// yields NaN when it is not a number.
    pub fn as_number(&self) -> f64 {
        match self {
            DataValue::Null => 0.0,
            DataValue::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            DataValue::Integer(i) => *i as f64,
            DataValue::Float(f) => *f,
            DataValue::Text(s) => parse_number(s),
        }
    }

    /// Strict equality: same kind and same value. Integers and floats are
    /// both numbers and compare numerically.
    pub fn strict_equals(&self, other: &DataValue) -> bool {
        match (self, other) {
            (DataValue::Null, DataValue::Null) => true,
            (DataValue::Boolean(a), DataValue::Boolean(b)) => a == b,
            (DataValue::Text(a), DataValue::Text(b)) => a == b,
            (a, b) if a.is_number() && b.is_number() => a.as_number() == b.as_number(),
            _ => false,
        }
    }

    /// Loose equality with coercion between booleans, numbers and text.
    /// Null only equals null.
    pub fn loose_equals(&self, other: &DataValue) -> bool {
        match (self, other) {
            (DataValue::Null, DataValue::Null) => true,
            (DataValue::Null, _) | (_, DataValue::Null) => false,
            (DataValue::Boolean(a), DataValue::Boolean(b)) => a == b,
            (DataValue::Text(a), DataValue::Text(b)) => a == b,
            (DataValue::Boolean(_), _) => DataValue::Float(self.as_number()).loose_equals(other),
            (_, DataValue::Boolean(_)) => self.loose_equals(&DataValue::Float(other.as_number())),
            _ => self.as_number() == other.as_number(),
        }
    }

    /// Relational `<`. Two texts compare lexicographically, anything else
    /// numerically; NaN on either side is never less.
    pub fn less_than(&self, other: &DataValue) -> bool {
        match (self, other) {
            (DataValue::Text(a), DataValue::Text(b)) => a < b,
            _ => self.as_number() < other.as_number(),
        }
    }

    /// Relational `>`, mirror of [`DataValue::less_than`]
    pub fn greater_than(&self, other: &DataValue) -> bool {
        other.less_than(self)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => write!(f, "NULL"),
            DataValue::Boolean(b) => write!(f, "{}", b),
            DataValue::Integer(i) => write!(f, "{}", i),
            DataValue::Float(fl) => write!(f, "{}", fl),
            DataValue::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Strict `=` against a field that may be absent. Absent never matches.
pub fn field_strict_equals(field: Option<&DataValue>, literal: &DataValue) -> bool {
    field.is_some_and(|value| value.strict_equals(literal))
}

/// Loose `IS` against a field that may be absent. Absent is loosely equal
/// to null and nothing else.
pub fn field_loose_equals(field: Option<&DataValue>, literal: &DataValue) -> bool {
    match field {
        Some(value) => value.loose_equals(literal),
        None => matches!(literal, DataValue::Null),
    }
}

/// `field < literal`; an absent field converts to NaN and never compares.
pub fn field_less_than(field: Option<&DataValue>, literal: &DataValue) -> bool {
    field.is_some_and(|value| value.less_than(literal))
}

/// `field > literal`; an absent field converts to NaN and never compares.
pub fn field_greater_than(field: Option<&DataValue>, literal: &DataValue) -> bool {
    field.is_some_and(|value| value.greater_than(literal))
}

/// Total order used for ORDER BY keys.
///
/// Null, booleans and numbers compare numerically, texts lexicographically.
/// Numeric-like values sort before texts and absent fields sort last, which
/// keeps the order total for columns holding mixed kinds.
pub fn compare_for_sort(a: Option<&DataValue>, b: Option<&DataValue>) -> Ordering {
    match (a, b) {
        (Some(DataValue::Text(x)), Some(DataValue::Text(y))) => x.cmp(y),
        (Some(x), Some(y)) if sort_rank(a) == 0 && sort_rank(b) == 0 => x
            .as_number()
            .partial_cmp(&y.as_number())
            .unwrap_or(Ordering::Equal),
        _ => sort_rank(a).cmp(&sort_rank(b)),
    }
}

fn sort_rank(value: Option<&DataValue>) -> u8 {
    match value {
        Some(DataValue::Text(_)) => 1,
        Some(_) => 0,
        None => 2,
    }
}

/// Parse text the way a string-to-number coercion does: surrounding
/// whitespace is ignored, an empty string is zero, hex needs a `0x` prefix.
fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }

    // Rust accepts "inf" and "nan" spellings that are not numbers here
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
