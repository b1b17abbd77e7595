// SQL Parser Components
//
// This module contains the separate components of the SQL parser.
// Each component handles a specific aspect of SQL parsing.

// Core parser component
pub mod parser_core;
pub mod parser_ddl;
pub mod parser_dml;
pub mod parser_expressions;
pub mod parser_select;

// Re-export frequently used items
pub use parser_core::{ParseError, ParseResult, Parser};
pub use parser_ddl::{parse_create, parse_drop};
pub use parser_dml::{parse_delete, parse_insert, parse_update};
pub use parser_expressions::{parse_expression, parse_literal};
pub use parser_select::parse_select;
