// SQL Lexer Implementation
//
// This module implements a lexer for SQL that tokenizes input queries.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// SQL Token types
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    // Keywords
    SELECT,
    FROM,
    WHERE,
    INSERT,
    INTO,
    VALUES,
    DELETE,
    UPDATE,
    SET,
    CREATE,
    TABLE,
    DROP,
    AND,
    OR,
    NOT,
    IS,
    NULL,
    TRUE,
    FALSE,
    ORDER,
    BY,
    ASC,
    DESC,
    LIMIT,
    OFFSET,
    PRIMARY,
    KEY,
    UNIQUE,
    DEFAULT,

    // Literals, the text is kept in `Token::literal`
    INTEGER,
    FLOAT,
    STRING(String),

    // Identifiers
    IDENTIFIER(String),

    // Operators
    EQ,       // =
    NotEq,    // != or <>
    LT,       // <
    GT,       // >
    LtEq,     // <=
    GtEq,     // >=
    MINUS,    // -
    ASTERISK, // *

    // Punctuation
    SEMICOLON, // ;
    COMMA,     // ,
    LPAREN,    // (
    RPAREN,    // )
    DOT,       // .

    // Special
    EOF,
    ILLEGAL,
}

/// A Token represents a lexical unit in the SQL query
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub token_type: TokenType,
    pub literal: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "'{}' at line {}, column {}",
            self.literal, self.line, self.column
        )
    }
}

/// SQL Lexer for breaking a query string into tokens
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    ch: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from a SQL query string
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars().peekable(),
            line: 1,
            column: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// Read the next character from the input
    fn read_char(&mut self) -> Option<char> {
        // A newline only moves the position once it has been passed
        if self.ch == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        let ch = self.input.next();
        self.ch = ch;
        if ch.is_some() {
            self.column += 1;
        }
        ch
    }

    /// Peek at the next character without advancing
    fn peek_char(&mut self) -> Option<char> {
        self.input.peek().copied()
    }

    /// Skip whitespace and `--` line comments
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.ch {
            if ch.is_whitespace() {
                self.read_char();
            } else if ch == '-' && self.peek_char() == Some('-') {
                while !matches!(self.ch, None | Some('\n')) {
                    self.read_char();
                }
            } else {
                break;
            }
        }
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) -> String {
        let mut identifier = String::new();

        while let Some(ch) = self.ch {
            if is_letter(ch) || ch.is_ascii_digit() {
                identifier.push(ch);
                self.read_char();
            } else {
                break;
            }
        }

        identifier
    }

    /// Read a number (integer or float). A fractional part needs a digit
    /// after the dot so `t.1` style input is not swallowed.
    fn read_number(&mut self) -> String {
        let mut number = String::new();
        let mut has_dot = false;

        while let Some(ch) = self.ch {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.read_char();
            } else if ch == '.' && !has_dot && self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                has_dot = true;
                number.push(ch);
                self.read_char();
            } else {
                break;
            }
        }

        number
    }

    /// Read text enclosed in `quote`, where a doubled quote stands for the
    /// quote character itself. Returns `None` when the input ends first.
    fn read_quoted(&mut self, quote: char) -> Option<String> {
        let mut text = String::new();

        // Skip opening quote which is in self.ch
        self.read_char();

        loop {
            match self.ch {
                None => return None,
                Some(ch) if ch == quote => {
                    if self.peek_char() == Some(quote) {
                        text.push(quote);
                        self.read_char();
                        self.read_char();
                    } else {
                        // Skip closing quote
                        self.read_char();
                        return Some(text);
                    }
                }
                Some(ch) => {
                    text.push(ch);
                    self.read_char();
                }
            }
        }
    }

    /// Get the token type for an identifier (could be a keyword)
    fn lookup_identifier(&self, ident: &str) -> TokenType {
        match ident.to_uppercase().as_str() {
            "SELECT" => TokenType::SELECT,
            "FROM" => TokenType::FROM,
            "WHERE" => TokenType::WHERE,
            "INSERT" => TokenType::INSERT,
            "INTO" => TokenType::INTO,
            "VALUES" => TokenType::VALUES,
            "DELETE" => TokenType::DELETE,
            "UPDATE" => TokenType::UPDATE,
            "SET" => TokenType::SET,
            "CREATE" => TokenType::CREATE,
            "TABLE" => TokenType::TABLE,
            "DROP" => TokenType::DROP,
            "AND" => TokenType::AND,
            "OR" => TokenType::OR,
            "NOT" => TokenType::NOT,
            "IS" => TokenType::IS,
            "NULL" => TokenType::NULL,
            "TRUE" => TokenType::TRUE,
            "FALSE" => TokenType::FALSE,
            "ORDER" => TokenType::ORDER,
            "BY" => TokenType::BY,
            "ASC" => TokenType::ASC,
            "DESC" => TokenType::DESC,
            "LIMIT" => TokenType::LIMIT,
            "OFFSET" => TokenType::OFFSET,
            "PRIMARY" => TokenType::PRIMARY,
            "KEY" => TokenType::KEY,
            "UNIQUE" => TokenType::UNIQUE,
            "DEFAULT" => TokenType::DEFAULT,
            _ => TokenType::IDENTIFIER(ident.to_string()),
        }
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let mut token = Token {
            token_type: TokenType::EOF,
            literal: String::new(),
            line: self.line,
            column: self.column,
        };

        let ch = match self.ch {
            Some(ch) => ch,
            None => return token,
        };
        token.literal = ch.to_string();

        match ch {
            ';' => token.token_type = TokenType::SEMICOLON,
            ',' => token.token_type = TokenType::COMMA,
            '(' => token.token_type = TokenType::LPAREN,
            ')' => token.token_type = TokenType::RPAREN,
            '.' => token.token_type = TokenType::DOT,
            '-' => token.token_type = TokenType::MINUS,
            '*' => token.token_type = TokenType::ASTERISK,
            '=' => token.token_type = TokenType::EQ,
            '<' => match self.peek_char() {
                Some('=') => {
                    self.read_char();
                    token.literal.push('=');
                    token.token_type = TokenType::LtEq;
                }
                Some('>') => {
                    self.read_char();
                    token.literal.push('>');
                    token.token_type = TokenType::NotEq;
                }
                _ => token.token_type = TokenType::LT,
            },
            '>' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    token.literal.push('=');
                    token.token_type = TokenType::GtEq;
                } else {
                    token.token_type = TokenType::GT;
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    token.literal.push('=');
                    token.token_type = TokenType::NotEq;
                } else {
                    token.token_type = TokenType::ILLEGAL;
                }
            }
            '\'' | '"' => {
                match self.read_quoted(ch) {
                    Some(text) => {
                        token.literal = format!("{}{}{}", ch, text, ch);
                        token.token_type = TokenType::STRING(text);
                    }
                    None => {
                        token.literal = "unterminated string".to_string();
                        token.token_type = TokenType::ILLEGAL;
                    }
                }
                return token; // read_quoted already advanced
            }
            '`' => {
                match self.read_quoted('`') {
                    Some(name) => {
                        token.literal = name.clone();
                        token.token_type = TokenType::IDENTIFIER(name);
                    }
                    None => {
                        token.literal = "unterminated identifier".to_string();
                        token.token_type = TokenType::ILLEGAL;
                    }
                }
                return token;
            }
            _ => {
                if is_letter(ch) {
                    let identifier = self.read_identifier();
                    token.token_type = self.lookup_identifier(&identifier);
                    token.literal = identifier;
                    return token; // No need to read_char again
                } else if ch.is_ascii_digit() {
                    let number = self.read_number();
                    token.token_type = if number.contains('.') {
                        TokenType::FLOAT
                    } else {
                        TokenType::INTEGER
                    };
                    token.literal = number;
                    return token;
                } else {
                    token.token_type = TokenType::ILLEGAL;
                }
            }
        }

        self.read_char();
        token
    }

    /// Tokenize the whole input, ending with an EOF token
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token_type == TokenType::EOF;
            tokens.push(token);
            if is_eof {
                return tokens;
            }
        }
    }
}

/// Check if a character is a letter (for identifiers)
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
