// Core Parser Implementation
//
// This module implements the core parser functionality for SQL

use std::fmt;
use std::iter::Peekable;
use std::vec::IntoIter;

use crate::query::parser::ast::*;
use crate::query::parser::lexer::{Lexer, Token, TokenType};

use super::parser_ddl::{parse_create, parse_drop};
use super::parser_dml::{parse_delete, parse_insert, parse_update};
use super::parser_select::parse_select;

/// SQL Parsing errors
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnexpectedToken(Token),
    ExpectedToken(TokenType, Token),
    InvalidLiteral(String),
    EndOfInput,
    InvalidSyntax(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken(token) => write!(f, "Unexpected token {}", token),
            ParseError::ExpectedToken(expected, actual) => {
                write!(f, "Expected {:?}, found {}", expected, actual)
            }
            ParseError::InvalidLiteral(lit) => write!(f, "Invalid literal: {}", lit),
            ParseError::EndOfInput => write!(f, "Unexpected end of input"),
            ParseError::InvalidSyntax(reason) => write!(f, "Invalid syntax: {}", reason),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// SQL Parser for constructing an AST from SQL tokens
pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    pub current_token: Option<Token>,
}

impl Parser {
    /// Create a new parser from a SQL query string
    pub fn new(input: &str) -> Self {
        let mut parser = Parser {
            tokens: Lexer::new(input).tokenize().into_iter().peekable(),
            current_token: None,
        };

        parser.next_token();
        parser
    }

    /// Parse exactly one statement. An optional trailing semicolon is
    /// allowed; anything after it is an error.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let statement = match self.current_token_type() {
            Some(TokenType::SELECT) => parse_select(self)?,
            Some(TokenType::INSERT) => parse_insert(self)?,
            Some(TokenType::UPDATE) => parse_update(self)?,
            Some(TokenType::DELETE) => parse_delete(self)?,
            Some(TokenType::CREATE) => parse_create(self)?,
            Some(TokenType::DROP) => parse_drop(self)?,
            Some(TokenType::EOF) | None => return Err(ParseError::EndOfInput),
            Some(_) => return Err(self.unexpected()),
        };

        // Optional semicolon at the end
        if self.current_token_is(TokenType::SEMICOLON) {
            self.next_token();
        }

        self.expect_token(TokenType::EOF)?;
        Ok(statement)
    }

    /// Advance to the next token
    pub fn next_token(&mut self) -> Option<Token> {
        self.current_token = self.tokens.next();
        self.current_token.clone()
    }

    /// Check if the current token matches the expected type and consume it
    pub fn expect_token(&mut self, expected: TokenType) -> ParseResult<Token> {
        match self.current_token.clone() {
            Some(token) if matches_token_type(&token.token_type, &expected) => {
                self.next_token();
                Ok(token)
            }
            Some(token) if token.token_type == TokenType::EOF => Err(ParseError::EndOfInput),
            Some(token) => Err(ParseError::ExpectedToken(expected, token)),
            None => Err(ParseError::EndOfInput),
        }
    }

    /// Check if the current token is of the given type
    pub fn current_token_is(&self, token_type: TokenType) -> bool {
        match &self.current_token {
            Some(token) => matches_token_type(&token.token_type, &token_type),
            None => false,
        }
    }

    /// Get current token type, if any
    pub fn current_token_type(&self) -> Option<TokenType> {
        self.current_token.as_ref().map(|t| t.token_type.clone())
    }

    /// Check if the next token is of a specific type
    pub fn peek_token_is(&mut self, expected_type: TokenType) -> bool {
        self.tokens
            .peek()
            .is_some_and(|t| matches_token_type(&t.token_type, &expected_type))
    }

    /// Parse an identifier (common utility)
    pub fn parse_identifier(&mut self) -> ParseResult<String> {
        match self.current_token.clone() {
            Some(token) => {
                if let TokenType::IDENTIFIER(name) = &token.token_type {
                    let identifier = name.clone();
                    self.next_token();
                    Ok(identifier)
                } else if token.token_type == TokenType::EOF {
                    Err(ParseError::EndOfInput)
                } else {
                    Err(ParseError::ExpectedToken(TokenType::IDENTIFIER(String::new()), token))
                }
            }
            None => Err(ParseError::EndOfInput),
        }
    }

    /// Error describing the current token as unexpected
    pub fn unexpected(&self) -> ParseError {
        match &self.current_token {
            Some(token) if token.token_type != TokenType::EOF => {
                ParseError::UnexpectedToken(token.clone())
            }
            _ => ParseError::EndOfInput,
        }
    }
}

/// Helper function to check if a token type matches the expected type
pub fn matches_token_type(token_type: &TokenType, expected: &TokenType) -> bool {
    match (token_type, expected) {
        (TokenType::IDENTIFIER(actual_val), TokenType::IDENTIFIER(expected_val)) => {
            // An empty expected name matches any identifier
            expected_val.is_empty() || actual_val.eq_ignore_ascii_case(expected_val)
        }
        // Other variants match on the discriminant alone
        _ => std::mem::discriminant(token_type) == std::mem::discriminant(expected),
    }
}

/// Convert a token type to a comparison operator
pub fn token_to_operator(token_type: &TokenType) -> ParseResult<Operator> {
    match token_type {
        TokenType::EQ => Ok(Operator::Equals),
        TokenType::NotEq => Ok(Operator::NotEquals),
        TokenType::LT => Ok(Operator::LessThan),
        TokenType::GT => Ok(Operator::GreaterThan),
        TokenType::LtEq => Ok(Operator::LessEquals),
        TokenType::GtEq => Ok(Operator::GreaterEquals),
        _ => Err(ParseError::InvalidSyntax(format!(
            "Not a comparison operator: {:?}",
            token_type
        ))),
    }
}

/// Get operator precedence for boolean expression parsing
pub fn get_operator_precedence(token_type: &TokenType) -> u8 {
    match token_type {
        TokenType::OR => 1,
        TokenType::AND => 2,
        _ => 0,
    }
}
