// SELECT Statement Parser Implementation
//
// This module implements parsing for SQL SELECT statements

use crate::query::parser::ast::*;
use crate::query::parser::lexer::TokenType;

use super::parser_core::{ParseError, ParseResult, Parser};
use super::parser_expressions::{parse_column_reference, parse_expression};

/// Parse a SELECT statement
pub fn parse_select(parser: &mut Parser) -> ParseResult<Statement> {
    // Consume SELECT keyword
    parser.expect_token(TokenType::SELECT)?;

    // Parse columns
    let columns = parse_select_columns(parser)?;

    // Expect FROM keyword
    parser.expect_token(TokenType::FROM)?;
    let from = TableReference {
        name: parser.parse_identifier()?,
    };

    // Parse optional WHERE clause
    let where_clause = if parser.current_token_is(TokenType::WHERE) {
        parser.next_token(); // Consume WHERE
        Some(parse_expression(parser, 0)?)
    } else {
        None
    };

    // Parse optional ORDER BY clause
    let order_by = if parser.current_token_is(TokenType::ORDER) {
        parse_order_by_clause(parser)?
    } else {
        Vec::new()
    };

    // Parse optional LIMIT clause
    let limit = if parser.current_token_is(TokenType::LIMIT) {
        Some(parse_limit_clause(parser)?)
    } else {
        None
    };

    Ok(Statement::Select(SelectStatement {
        columns,
        from,
        where_clause,
        order_by,
        limit,
    }))
}

/// Parse SELECT column list
fn parse_select_columns(parser: &mut Parser) -> ParseResult<Projection> {
    if parser.current_token_is(TokenType::ASTERISK) {
        parser.next_token();
        return Ok(Projection::Wildcard);
    }

    let mut columns = vec![parse_column_reference(parser)?];
    while parser.current_token_is(TokenType::COMMA) {
        parser.next_token(); // Consume comma
        columns.push(parse_column_reference(parser)?);
    }

    Ok(Projection::Columns(columns))
}

/// Parse an ORDER BY clause
fn parse_order_by_clause(parser: &mut Parser) -> ParseResult<Vec<OrderByExpr>> {
    parser.expect_token(TokenType::ORDER)?;
    parser.expect_token(TokenType::BY)?;

    let mut order_by = Vec::new();
    loop {
        let column = parse_column_reference(parser)?;

        let direction = if parser.current_token_is(TokenType::DESC) {
            parser.next_token();
            SortDirection::Desc
        } else if parser.current_token_is(TokenType::ASC) {
            parser.next_token();
            SortDirection::Asc
        } else {
            SortDirection::default()
        };

        order_by.push(OrderByExpr { column, direction });

        if parser.current_token_is(TokenType::COMMA) {
            parser.next_token();
        } else {
            break; // No more expressions in ORDER BY
        }
    }

    Ok(order_by)
}

/// Parse `LIMIT count [OFFSET offset]` or `LIMIT offset, count`
fn parse_limit_clause(parser: &mut Parser) -> ParseResult<LimitClause> {
    parser.expect_token(TokenType::LIMIT)?;
    let first = parse_unsigned(parser)?;

    if parser.current_token_is(TokenType::COMMA) {
        parser.next_token();
        let count = parse_unsigned(parser)?;
        return Ok(LimitClause {
            count,
            offset: first,
        });
    }

    let offset = if parser.current_token_is(TokenType::OFFSET) {
        parser.next_token();
        parse_unsigned(parser)?
    } else {
        0
    };

    Ok(LimitClause {
        count: first,
        offset,
    })
}

fn parse_unsigned(parser: &mut Parser) -> ParseResult<usize> {
    match parser.current_token.clone() {
        Some(token) if token.token_type == TokenType::INTEGER => {
            let value = token
                .literal
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidLiteral(token.literal.clone()))?;
            parser.next_token();
            Ok(value)
        }
        Some(token) if token.token_type == TokenType::MINUS => Err(ParseError::InvalidLiteral(
            "LIMIT and OFFSET must be non-negative".to_string(),
        )),
        _ => Err(parser.unexpected()),
    }
}
