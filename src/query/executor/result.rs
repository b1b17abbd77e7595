// Query Result Implementation
//
// This module defines the result types for query execution.

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::value::DataValue;
use crate::query::parser::components::ParseError;
use crate::storage::StorageError;

/// Represents a row in query results
///
/// Columns keep the order they were requested in. A column missing from the
/// source record is missing from the row as well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: LinkedHashMap<String, DataValue>,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from column values
    #[cfg(test)]
    pub fn from_values(columns: Vec<String>, values: Vec<DataValue>) -> Self {
        let mut row = Row::new();
        for (col, val) in columns.into_iter().zip(values) {
            row.set(col, val);
        }
        row
    }

    /// Create a row from an ordered map
    pub fn from_map(values: LinkedHashMap<String, DataValue>) -> Self {
        Row { values }
    }

    /// Get a value by column name
    pub fn get(&self, column: &str) -> Option<&DataValue> {
        self.values.get(column)
    }

    /// Set a value for a column
    pub fn set(&mut self, column: String, value: DataValue) {
        self.values.insert(column, value);
    }

    /// Get all columns in the row
    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Represents query execution error
#[derive(Error, Debug)]
pub enum QueryError {
    /// The statement could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Table not found
    #[error("Table not found: {0}")]
    TableNotFound(String),
    /// Error from storage layer
    #[error("Storage error: {0}")]
    Storage(#[source] StorageError),
}

impl From<StorageError> for QueryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::TableNotFound(name) => QueryError::TableNotFound(name),
            other => QueryError::Storage(other),
        }
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query resultset representation
///
/// SELECT produces columns and rows; every other statement produces a status
/// message.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResultSet {
    /// Column names in the resultset
    columns: Vec<String>,
    /// Rows of data
    rows: Vec<Row>,
    /// Outcome of a statement that returns no rows
    message: Option<String>,
}

impl QueryResultSet {
    /// Create a new empty resultset with column names
    #[cfg(test)]
    pub fn new(columns: Vec<String>) -> Self {
        QueryResultSet {
            columns,
            rows: Vec::new(),
            message: None,
        }
    }

    /// Create a resultset holding `rows`
    pub fn with_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        QueryResultSet {
            columns,
            rows,
            message: None,
        }
    }

    /// Create a resultset that only carries a status message
    pub fn status(message: impl Into<String>) -> Self {
        QueryResultSet {
            columns: Vec::new(),
            rows: Vec::new(),
            message: Some(message.into()),
        }
    }

    /// Add a row to the resultset
    #[cfg(test)]
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the columns in the resultset
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the rows in the resultset
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Status message of a non-SELECT statement
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Format the resultset as a string table
    pub fn to_string_table(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        if self.columns.is_empty() {
            return "Empty result".to_string();
        }

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| row.get(col).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                cells
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(col.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut result = String::new();

        // Add column headers
        result.push('|');
        for (col, width) in self.columns.iter().zip(&widths) {
            result.push_str(&format!(" {:<width$} |", col, width = *width));
        }
        result.push('\n');

        // Add separator
        result.push('|');
        for width in &widths {
            result.push_str(&format!("{}|", "-".repeat(width + 2)));
        }
        result.push('\n');

        // Add rows
        for row in &cells {
            result.push('|');
            for (cell, width) in row.iter().zip(&widths) {
                result.push_str(&format!(" {:<width$} |", cell, width = *width));
            }
            result.push('\n');
        }

        result.push_str(&format!("({} row{})", self.rows.len(), if self.rows.len() == 1 { "" } else { "s" }));
        result
    }

    /// Format the resultset as JSON: an array of row objects, or
    /// `{"status": ...}` for a status result
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        let document = match &self.message {
            Some(message) => serde_json::json!({ "status": message }),
            None => serde_json::to_value(&self.rows)?,
        };
        if pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
    }
}
