// SQL Abstract Syntax Tree (AST) Implementation
//
// This module defines the AST nodes for representing parsed SQL queries.

use std::fmt;

use crate::catalog::DataType;

/// Represents a SQL statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    Create(CreateStatement),
    Drop(DropStatement),
}

/// SELECT statement representation
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    /// Columns in SELECT clause
    pub columns: Projection,
    /// FROM clause table reference
    pub from: TableReference,
    /// WHERE clause (optional)
    pub where_clause: Option<Expression>,
    /// ORDER BY keys, earlier keys take precedence
    pub order_by: Vec<OrderByExpr>,
    /// LIMIT clause (optional)
    pub limit: Option<LimitClause>,
}

/// Column list of a SELECT
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// All columns (*)
    Wildcard,
    /// Explicit column references, in output order
    Columns(Vec<ColumnReference>),
}

/// Column reference (could be qualified with table name)
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnReference {
    pub table: Option<String>,
    pub name: String,
}

impl ColumnReference {
    pub fn new(name: &str) -> Self {
        ColumnReference {
            table: None,
            name: name.to_string(),
        }
    }
}

/// Table reference in FROM clause
#[derive(Debug, Clone, PartialEq)]
pub struct TableReference {
    pub name: String,
}

/// One ORDER BY key
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub column: ColumnReference,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// LIMIT count [OFFSET offset]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitClause {
    pub count: usize,
    pub offset: usize,
}

/// WHERE clause expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// AND / OR of two sub-expressions
    Logical {
        left: Box<Expression>,
        op: LogicalOperator,
        right: Box<Expression>,
    },
    /// `column op literal`
    Comparison {
        column: ColumnReference,
        op: Operator,
        value: Value,
    },
}

impl Expression {
    /// Build `left AND right`
    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::Logical {
            left: Box::new(left),
            op: LogicalOperator::And,
            right: Box::new(right),
        }
    }

    /// Build `left OR right`
    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Logical {
            left: Box::new(left),
            op: LogicalOperator::Or,
            right: Box::new(right),
        }
    }

    /// Build `column op value`
    pub fn compare(column: &str, op: Operator, value: Value) -> Self {
        Expression::Comparison {
            column: ColumnReference::new(column),
            op,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    NotEquals,
    Is,
    IsNot,
    LessThan,
    GreaterThan,
    LessEquals,
    GreaterEquals,
}

/// SQL values
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

/// CREATE TABLE statement
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStatement {
    pub table_name: String,
    pub columns: Vec<ColumnDef>,
}

/// Column definition for CREATE TABLE
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
}

/// DROP TABLE statement
#[derive(Debug, Clone, PartialEq)]
pub struct DropStatement {
    pub table_name: String,
}

/// INSERT statement
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub table_name: String,
    /// Explicit column list; `None` means the declared column order
    pub columns: Option<Vec<String>>,
    /// One tuple per row to insert
    pub values: Vec<Vec<Value>>,
}

/// UPDATE statement
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub table_name: String,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<Expression>,
}

/// Column assignment in UPDATE
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

/// DELETE statement
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub table_name: String,
    pub where_clause: Option<Expression>,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select(_) => write!(f, "SELECT statement"),
            Statement::Insert(_) => write!(f, "INSERT statement"),
            Statement::Update(_) => write!(f, "UPDATE statement"),
            Statement::Delete(_) => write!(f, "DELETE statement"),
            Statement::Create(_) => write!(f, "CREATE statement"),
            Statement::Drop(_) => write!(f, "DROP statement"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
            Operator::Is => "IS",
            Operator::IsNot => "IS NOT",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessEquals => "<=",
            Operator::GreaterEquals => ">=",
        };
        write!(f, "{}", symbol)
    }
}
