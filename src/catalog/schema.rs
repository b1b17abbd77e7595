// Column Types
//
// This module defines the declared column types recorded in the catalog.
// Types are descriptive only: nothing checks written values against them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Data types a column can be declared with
///
/// Common names and their aliases map onto a known variant. Any other type
/// name is kept as written in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    Integer,
    Float,
    Text,
    Boolean,
    Date,
    Timestamp,
    Other(String),
}

impl DataType {
    /// Map a type name, including the common aliases, to a DataType
    pub fn from_name(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "INT" | "INTEGER" | "BIGINT" | "SMALLINT" => DataType::Integer,
            "FLOAT" | "REAL" | "DOUBLE" | "NUMERIC" | "DECIMAL" => DataType::Float,
            "TEXT" | "VARCHAR" | "CHAR" | "STRING" => DataType::Text,
            "BOOL" | "BOOLEAN" => DataType::Boolean,
            "DATE" => DataType::Date,
            "TIMESTAMP" | "DATETIME" => DataType::Timestamp,
            _ => DataType::Other(name.to_string()),
        }
    }
}

impl FromStr for DataType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DataType::from_name(s))
    }
}

impl From<String> for DataType {
    fn from(value: String) -> Self {
        DataType::from_name(&value)
    }
}

impl From<DataType> for String {
    fn from(data_type: DataType) -> Self {
        data_type.to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Integer => "INTEGER",
            DataType::Float => "FLOAT",
            DataType::Text => "TEXT",
            DataType::Boolean => "BOOLEAN",
            DataType::Date => "DATE",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Other(name) => name.as_str(),
        };
        write!(f, "{}", name)
    }
}
