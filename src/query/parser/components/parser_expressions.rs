// Expression Parser Implementation
//
// This module implements WHERE clause parsing: comparisons between a column
// and a literal, combined with AND / OR and parentheses.

use crate::query::parser::ast::*;
use crate::query::parser::lexer::TokenType;

use super::parser_core::{get_operator_precedence, token_to_operator, ParseError, ParseResult, Parser};

/// Parse an expression with operator precedence
pub fn parse_expression(parser: &mut Parser, precedence: u8) -> ParseResult<Expression> {
    let mut left_expr = parse_prefix_expression(parser)?;

    loop {
        let current_op_precedence = match &parser.current_token {
            Some(token) => get_operator_precedence(&token.token_type),
            None => 0,
        };

        if current_op_precedence == 0 || precedence >= current_op_precedence {
            break;
        }

        let op = if parser.current_token_is(TokenType::AND) {
            LogicalOperator::And
        } else {
            LogicalOperator::Or
        };
        parser.next_token(); // Consume AND / OR

        let right_expr = parse_expression(parser, current_op_precedence)?;
        left_expr = Expression::Logical {
            left: Box::new(left_expr),
            op,
            right: Box::new(right_expr),
        };
    }

    Ok(left_expr)
}

/// Parse a parenthesized expression or a single comparison
fn parse_prefix_expression(parser: &mut Parser) -> ParseResult<Expression> {
    match parser.current_token_type() {
        Some(TokenType::LPAREN) => {
            parser.next_token();
            let expr = parse_expression(parser, 0)?;
            parser.expect_token(TokenType::RPAREN)?;
            Ok(expr)
        }
        Some(TokenType::IDENTIFIER(_)) => parse_comparison(parser),
        _ => Err(parser.unexpected()),
    }
}

/// Parse `column op literal` or `column IS [NOT] literal`
fn parse_comparison(parser: &mut Parser) -> ParseResult<Expression> {
    let column = parse_column_reference(parser)?;

    let op = if parser.current_token_is(TokenType::IS) {
        parser.next_token(); // Consume IS
        if parser.current_token_is(TokenType::NOT) {
            parser.next_token(); // Consume NOT
            Operator::IsNot
        } else {
            Operator::Is
        }
    } else {
        let token_type = parser.current_token_type().ok_or(ParseError::EndOfInput)?;
        match token_to_operator(&token_type) {
            Ok(op) => {
                parser.next_token();
                op
            }
            Err(_) => {
                return match parser.current_token.clone() {
                    Some(token) if token.token_type != TokenType::EOF => Err(ParseError::InvalidSyntax(format!(
                        "Expected a comparison operator after column '{}', found {}",
                        column.name, token
                    ))),
                    _ => Err(ParseError::EndOfInput),
                };
            }
        }
    };

    let value = parse_literal(parser)?;
    Ok(Expression::Comparison { column, op, value })
}

/// Parse a possibly qualified column name. The qualifier is kept but the
/// executor only looks at the column name.
pub fn parse_column_reference(parser: &mut Parser) -> ParseResult<ColumnReference> {
    let first = parser.parse_identifier()?;

    if parser.current_token_is(TokenType::DOT) {
        parser.next_token(); // Consume dot
        let name = parser.parse_identifier()?;
        Ok(ColumnReference {
            table: Some(first),
            name,
        })
    } else {
        Ok(ColumnReference {
            table: None,
            name: first,
        })
    }
}

/// Parse a literal value
pub fn parse_literal(parser: &mut Parser) -> ParseResult<Value> {
    let token = match parser.current_token.clone() {
        Some(token) => token,
        None => return Err(ParseError::EndOfInput),
    };

    let value = match token.token_type {
        TokenType::INTEGER => parse_integer(&token.literal)?,
        TokenType::FLOAT => parse_float(&token.literal)?,
        TokenType::STRING(text) => Value::String(text),
        TokenType::NULL => Value::Null,
        TokenType::TRUE => Value::Boolean(true),
        TokenType::FALSE => Value::Boolean(false),
        TokenType::MINUS => {
            parser.next_token(); // Consume MINUS
            let number = parser.current_token.clone().ok_or(ParseError::EndOfInput)?;
            let literal = format!("-{}", number.literal);
            match number.token_type {
                TokenType::INTEGER => parse_integer(&literal)?,
                TokenType::FLOAT => parse_float(&literal)?,
                TokenType::EOF => return Err(ParseError::EndOfInput),
                _ => return Err(ParseError::InvalidLiteral(literal)),
            }
        }
        TokenType::EOF => return Err(ParseError::EndOfInput),
        _ => return Err(ParseError::UnexpectedToken(token)),
    };

    parser.next_token(); // Consume the literal
    Ok(value)
}

/// Integers too large for i64 degrade to floats
fn parse_integer(literal: &str) -> ParseResult<Value> {
    match literal.parse::<i64>() {
        Ok(value) => Ok(Value::Integer(value)),
        Err(_) => parse_float(literal),
    }
}

fn parse_float(literal: &str) -> ParseResult<Value> {
    literal
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| ParseError::InvalidLiteral(literal.to_string()))
}
