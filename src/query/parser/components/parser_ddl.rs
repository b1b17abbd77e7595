// DDL Statement Parser Implementation
//
// This module implements parsing for SQL DDL (Data Definition Language) statements:
// CREATE TABLE and DROP TABLE.

use crate::catalog::DataType;
use crate::query::parser::ast::*;
use crate::query::parser::lexer::TokenType;

use super::parser_core::{ParseError, ParseResult, Parser};
use super::parser_expressions::parse_literal;

/// Parse a CREATE statement
pub fn parse_create(parser: &mut Parser) -> ParseResult<Statement> {
    // Consume CREATE keyword
    parser.expect_token(TokenType::CREATE)?;

    if !parser.current_token_is(TokenType::TABLE) {
        return Err(ParseError::InvalidSyntax("Only CREATE TABLE is supported".to_string()));
    }
    parser.next_token(); // Consume TABLE

    let table_name = parser.parse_identifier()?;

    parser.expect_token(TokenType::LPAREN)?;
    let columns = parse_column_definitions(parser)?;
    parser.expect_token(TokenType::RPAREN)?;

    Ok(Statement::Create(CreateStatement {
        table_name,
        columns,
    }))
}

/// Parse a DROP statement
pub fn parse_drop(parser: &mut Parser) -> ParseResult<Statement> {
    // Consume DROP keyword
    parser.expect_token(TokenType::DROP)?;

    if !parser.current_token_is(TokenType::TABLE) {
        return Err(ParseError::InvalidSyntax("Only DROP TABLE is supported".to_string()));
    }
    parser.next_token(); // Consume TABLE

    let table_name = parser.parse_identifier()?;
    Ok(Statement::Drop(DropStatement { table_name }))
}

/// Parse the comma separated body of CREATE TABLE. Table level
/// `PRIMARY KEY (...)` / `UNIQUE (...)` entries are accepted and skipped.
fn parse_column_definitions(parser: &mut Parser) -> ParseResult<Vec<ColumnDef>> {
    let mut columns = Vec::new();

    loop {
        if parser.current_token_is(TokenType::PRIMARY) || parser.current_token_is(TokenType::UNIQUE) {
            parse_table_constraint(parser)?;
        } else {
            columns.push(parse_column_definition(parser)?);
        }

        if parser.current_token_is(TokenType::COMMA) {
            parser.next_token(); // Consume comma
        } else {
            break;
        }
    }

    if columns.is_empty() {
        return Err(ParseError::InvalidSyntax(
            "CREATE TABLE needs at least one column".to_string(),
        ));
    }

    Ok(columns)
}

/// Parse `name TYPE [(size)] [constraints...]`
fn parse_column_definition(parser: &mut Parser) -> ParseResult<ColumnDef> {
    let name = parser.parse_identifier()?;
    let data_type = parse_data_type(parser)?;

    // Column constraints carry no meaning for the store and are dropped
    loop {
        match parser.current_token_type() {
            Some(TokenType::NOT) => {
                parser.next_token();
                parser.expect_token(TokenType::NULL)?;
            }
            Some(TokenType::NULL) | Some(TokenType::UNIQUE) => {
                parser.next_token();
            }
            Some(TokenType::PRIMARY) => {
                parser.next_token();
                parser.expect_token(TokenType::KEY)?;
            }
            Some(TokenType::DEFAULT) => {
                parser.next_token();
                parse_literal(parser)?;
            }
            _ => break,
        }
    }

    Ok(ColumnDef { name, data_type })
}

/// Parse a type name with an optional size such as `VARCHAR(255)` or
/// `DECIMAL(10, 2)`. Unrecognized names are kept as written.
fn parse_data_type(parser: &mut Parser) -> ParseResult<DataType> {
    let token = parser.current_token.clone().ok_or(ParseError::EndOfInput)?;
    let type_name = match &token.token_type {
        TokenType::IDENTIFIER(name) => name.clone(),
        TokenType::EOF => return Err(ParseError::EndOfInput),
        _ => return Err(ParseError::UnexpectedToken(token)),
    };

    let data_type = DataType::from_name(&type_name);
    parser.next_token(); // Consume type name

    if parser.current_token_is(TokenType::LPAREN) {
        parser.next_token();
        parser.expect_token(TokenType::INTEGER)?;
        if parser.current_token_is(TokenType::COMMA) {
            parser.next_token();
            parser.expect_token(TokenType::INTEGER)?;
        }
        parser.expect_token(TokenType::RPAREN)?;
    }

    Ok(data_type)
}

/// Skip `PRIMARY KEY (a, b)` or `UNIQUE (a)`
fn parse_table_constraint(parser: &mut Parser) -> ParseResult<()> {
    if parser.current_token_is(TokenType::PRIMARY) {
        parser.next_token();
        parser.expect_token(TokenType::KEY)?;
    } else {
        parser.expect_token(TokenType::UNIQUE)?;
    }

    parser.expect_token(TokenType::LPAREN)?;
    parser.parse_identifier()?;
    while parser.current_token_is(TokenType::COMMA) {
        parser.next_token();
        parser.parse_identifier()?;
    }
    parser.expect_token(TokenType::RPAREN)?;
    Ok(())
}
