// JSON Document Database Engine

pub mod catalog;
pub mod common;
pub mod query;
pub mod storage;

// Re-export key items for convenient access
pub use catalog::Catalog;
pub use common::{DataValue, RecordId};
pub use query::executor::engine::ExecutionEngine;
pub use query::executor::result::{QueryError, QueryResult, QueryResultSet, Row};
pub use query::parser::{parse, Parser};
pub use storage::{JsonStore, JsonStoreConfig, MemoryStore, Record, Storage, StorageError};
