// DML Statement Parser Implementation
//
// This module implements parsing for SQL DML (Data Manipulation Language) statements:
// INSERT, UPDATE, and DELETE

use crate::query::parser::ast::*;
use crate::query::parser::lexer::TokenType;

use super::parser_core::{ParseResult, Parser};
use super::parser_expressions::{parse_expression, parse_literal};

/// Parse an INSERT statement
pub fn parse_insert(parser: &mut Parser) -> ParseResult<Statement> {
    // Consume INSERT keyword
    parser.expect_token(TokenType::INSERT)?;

    // Expect INTO keyword
    parser.expect_token(TokenType::INTO)?;

    // Parse table name
    let table_name = parser.parse_identifier()?;

    // Parse column list (optional)
    let columns = if parser.current_token_is(TokenType::LPAREN) {
        parser.next_token(); // Consume left paren

        let mut cols = vec![parser.parse_identifier()?];
        while parser.current_token_is(TokenType::COMMA) {
            parser.next_token(); // Consume comma
            cols.push(parser.parse_identifier()?);
        }

        parser.expect_token(TokenType::RPAREN)?;
        Some(cols)
    } else {
        None
    };

    // Expect VALUES keyword
    parser.expect_token(TokenType::VALUES)?;

    // One or more value tuples
    let mut values = vec![parse_value_tuple(parser)?];
    while parser.current_token_is(TokenType::COMMA) {
        parser.next_token(); // Consume comma
        values.push(parse_value_tuple(parser)?);
    }

    Ok(Statement::Insert(InsertStatement {
        table_name,
        columns,
        values,
    }))
}

/// Parse `( literal {, literal} )`
fn parse_value_tuple(parser: &mut Parser) -> ParseResult<Vec<Value>> {
    parser.expect_token(TokenType::LPAREN)?;

    let mut tuple = vec![parse_literal(parser)?];
    while parser.current_token_is(TokenType::COMMA) {
        parser.next_token(); // Consume comma
        tuple.push(parse_literal(parser)?);
    }

    parser.expect_token(TokenType::RPAREN)?;
    Ok(tuple)
}

/// Parse an UPDATE statement
pub fn parse_update(parser: &mut Parser) -> ParseResult<Statement> {
    // Consume UPDATE keyword
    parser.expect_token(TokenType::UPDATE)?;

    // Parse table name
    let table_name = parser.parse_identifier()?;

    // Expect SET keyword
    parser.expect_token(TokenType::SET)?;

    // Parse column assignments
    let mut assignments = vec![parse_assignment(parser)?];
    while parser.current_token_is(TokenType::COMMA) {
        parser.next_token(); // Consume comma
        assignments.push(parse_assignment(parser)?);
    }

    // Parse optional WHERE clause
    let where_clause = parse_optional_where(parser)?;

    Ok(Statement::Update(UpdateStatement {
        table_name,
        assignments,
        where_clause,
    }))
}

fn parse_assignment(parser: &mut Parser) -> ParseResult<Assignment> {
    let column = parser.parse_identifier()?;
    parser.expect_token(TokenType::EQ)?;
    let value = parse_literal(parser)?;
    Ok(Assignment { column, value })
}

/// Parse a DELETE statement
pub fn parse_delete(parser: &mut Parser) -> ParseResult<Statement> {
    // Consume DELETE keyword
    parser.expect_token(TokenType::DELETE)?;

    // Expect FROM keyword
    parser.expect_token(TokenType::FROM)?;

    // Parse table name
    let table_name = parser.parse_identifier()?;

    // Parse optional WHERE clause
    let where_clause = parse_optional_where(parser)?;

    Ok(Statement::Delete(DeleteStatement {
        table_name,
        where_clause,
    }))
}

fn parse_optional_where(parser: &mut Parser) -> ParseResult<Option<Expression>> {
    if parser.current_token_is(TokenType::WHERE) {
        parser.next_token(); // Consume WHERE
        Ok(Some(parse_expression(parser, 0)?))
    } else {
        Ok(None)
    }
}
