#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use linked_hash_map::LinkedHashMap;
use tempfile::TempDir;

use jsondb::common::value::DataValue;
use jsondb::query::executor::engine::ExecutionEngine;
use jsondb::query::executor::result::QueryResultSet;
use jsondb::storage::{JsonStore, JsonStoreConfig, Record};

// Open a JSON store in a fresh temporary directory
pub fn create_temp_store() -> Result<(Arc<JsonStore>, TempDir)> {
    let dir = tempfile::tempdir()?;
    let store = Arc::new(JsonStore::open(JsonStoreConfig::with_data_dir(dir.path()))?);
    Ok((store, dir))
}

// Create an execution engine over a temporary JSON store
pub fn create_test_engine() -> Result<(ExecutionEngine, Arc<JsonStore>, TempDir)> {
    let (store, dir) = create_temp_store()?;
    let engine = ExecutionEngine::new(store.clone());
    Ok((engine, store, dir))
}

// Run each statement in order, failing on the first error
pub fn run_all(engine: &ExecutionEngine, statements: &[&str]) -> Result<()> {
    for sql in statements {
        engine.execute_query(sql)?;
    }
    Ok(())
}

// The `users` table shared by the query scenarios
pub fn create_users_table(engine: &ExecutionEngine) -> Result<()> {
    run_all(
        engine,
        &[
            "CREATE TABLE users (id INTEGER, age INTEGER)",
            "INSERT INTO users (id, age) VALUES (1, 30), (2, 20), (3, 25)",
        ],
    )
}

// Values of `column` across the result rows, absent cells skipped
pub fn column_values(result: &QueryResultSet, column: &str) -> Vec<DataValue> {
    result
        .rows()
        .iter()
        .filter_map(|row| row.get(column).cloned())
        .collect()
}

// Build a record from (column, value) pairs
pub fn record(fields: &[(&str, DataValue)]) -> Record {
    let mut value = LinkedHashMap::new();
    for (column, field) in fields {
        value.insert(column.to_string(), field.clone());
    }
    Record::new(value)
}

pub fn int(value: i64) -> DataValue {
    DataValue::Integer(value)
}

pub fn text(value: &str) -> DataValue {
    DataValue::Text(value.to_string())
}
