// SQL Parser Module
//
// This module is responsible for parsing SQL queries and converting them
// into an abstract syntax tree (AST) representation.

pub mod ast;
pub mod components;
pub mod lexer;

// Export key types
pub use self::ast::Statement;
pub use self::components::{ParseError, ParseResult, Parser};
pub use self::lexer::{Lexer, Token};

/// Parse a single SQL statement
pub fn parse(sql: &str) -> ParseResult<Statement> {
    Parser::new(sql).parse_statement()
}
