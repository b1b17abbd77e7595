// Type Conversion Utilities for the Execution Engine
//
// This module converts SQL literals into stored values.

use crate::common::value::DataValue;
use crate::query::parser::ast::Value as AstValue;

/// Largest magnitude at which every integer is exactly representable as f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Convert a parsed literal into a stored value. Floats with no fractional
/// part become integers so that `2.0` is written as `2`.
pub fn literal_to_data_value(value: &AstValue) -> DataValue {
    match value {
        AstValue::Null => DataValue::Null,
        AstValue::Integer(i) => DataValue::Integer(*i),
        AstValue::Float(f) => {
            if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
                DataValue::Integer(*f as i64)
            } else {
                DataValue::Float(*f)
            }
        }
        AstValue::String(s) => DataValue::Text(s.clone()),
        AstValue::Boolean(b) => DataValue::Boolean(*b),
    }
}
