//! Catalog Management Module
//!
//! This module manages the table metadata: which tables exist and the
//! declared columns of each.

pub mod catalog;
pub mod schema;
pub mod table;

// Re-export key types
pub use self::catalog::Catalog;
pub use self::schema::DataType;
pub use self::table::Table;
