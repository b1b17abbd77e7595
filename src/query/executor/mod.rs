// Query Executor Module
//
// This module is responsible for executing parsed statements against a
// storage backend and producing results.

pub mod ddl_executor;
pub mod dml_executor;
pub mod engine;
pub mod operators;
pub mod pipeline;
pub mod result;
pub mod type_conversion;

// Export key types
pub use self::engine::ExecutionEngine;
pub use self::pipeline::execute_select;
pub use self::result::{QueryError, QueryResult, QueryResultSet, Row};
