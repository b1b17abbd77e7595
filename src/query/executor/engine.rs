// Query Execution Engine Implementation
//
// This module implements the engine for executing SQL queries. Every
// statement is one load-transform-store cycle against the storage backend,
// run under the lock of the table it touches.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::query::executor::dml_executor::{delete_all, insert_rows, update_all};
use crate::query::executor::pipeline::execute_select;
use crate::query::executor::result::{QueryError, QueryResult, QueryResultSet};
use crate::query::executor::{ddl_executor, result::Row};
use crate::query::parser::ast::{
    CreateStatement, DeleteStatement, DropStatement, InsertStatement, Projection, SelectStatement,
    Statement, UpdateStatement,
};
use crate::query::parser::parse;
use crate::storage::{Storage, TableLocks};

pub struct ExecutionEngine {
    storage: Arc<dyn Storage>,
    locks: TableLocks,
}

impl ExecutionEngine {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        ExecutionEngine {
            storage,
            locks: TableLocks::new(),
        }
    }

    /// The storage backend this engine reads and writes
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Parse and execute a single SQL statement
    pub fn execute_query(&self, sql: &str) -> QueryResult<QueryResultSet> {
        let statement = parse(sql)?;
        debug!("Executing {}", statement);
        self.execute(statement)
    }

    pub fn execute(&self, statement: Statement) -> QueryResult<QueryResultSet> {
        match statement {
            Statement::Select(select) => self.execute_select(select),
            Statement::Insert(insert) => self.execute_insert(insert),
            Statement::Update(update) => self.execute_update(update),
            Statement::Delete(delete) => self.execute_delete(delete),
            Statement::Create(create) => self.execute_create(create),
            Statement::Drop(drop) => self.execute_drop(drop),
        }
    }

    fn execute_select(&self, select: SelectStatement) -> QueryResult<QueryResultSet> {
        let table_name = &select.from.name;

        let declared_columns = match &select.columns {
            Projection::Wildcard => self
                .locks
                .with_catalog(|| self.storage.load_catalog())?
                .column_names(table_name),
            Projection::Columns(refs) => refs.iter().map(|c| c.name.clone()).collect(),
        };

        let records = self
            .locks
            .with_table(table_name, || self.storage.load_table(table_name))?;

        let rows = execute_select(
            &records,
            &select.columns,
            select.where_clause.as_ref(),
            &select.order_by,
            select.limit.as_ref(),
        );

        let columns = match select.columns {
            Projection::Wildcard => wildcard_columns(declared_columns, &rows),
            Projection::Columns(_) => declared_columns,
        };

        debug!("SELECT from '{}' returned {} rows", table_name, rows.len());
        Ok(QueryResultSet::with_rows(columns, rows))
    }

    fn execute_insert(&self, insert: InsertStatement) -> QueryResult<QueryResultSet> {
        let table_name = &insert.table_name;

        let columns = match insert.columns {
            Some(columns) => columns,
            None => self
                .locks
                .with_catalog(|| self.storage.load_catalog())?
                .column_names(table_name),
        };

        let inserted = self.locks.with_table(table_name, || -> QueryResult<usize> {
            let mut records = self.storage.load_table(table_name)?;
            let inserted = insert_rows(&mut records, &columns, &insert.values);
            self.storage.save_table(table_name, &records)?;
            Ok(inserted)
        })?;

        debug!("Inserted {} records into '{}'", inserted, table_name);
        Ok(QueryResultSet::status(format!(
            "{} row{} inserted",
            inserted,
            plural(inserted)
        )))
    }

    fn execute_update(&self, update: UpdateStatement) -> QueryResult<QueryResultSet> {
        let table_name = &update.table_name;
        if update.where_clause.is_some() {
            warn!("UPDATE ignores its WHERE clause and rewrites every record of '{}'", table_name);
        }

        let updated = self.locks.with_table(table_name, || -> QueryResult<usize> {
            let mut records = self.storage.load_table(table_name)?;
            let updated = update_all(&mut records, &update.assignments);
            self.storage.save_table(table_name, &records)?;
            Ok(updated)
        })?;

        debug!("Updated {} records in '{}'", updated, table_name);
        Ok(QueryResultSet::status(format!(
            "{} row{} updated",
            updated,
            plural(updated)
        )))
    }

    fn execute_delete(&self, delete: DeleteStatement) -> QueryResult<QueryResultSet> {
        let table_name = &delete.table_name;
        if delete.where_clause.is_some() {
            warn!("DELETE ignores its WHERE clause and removes every record of '{}'", table_name);
        }

        let deleted = self.locks.with_table(table_name, || -> QueryResult<usize> {
            let mut records = self.storage.load_table(table_name)?;
            let deleted = delete_all(&mut records);
            self.storage.save_table(table_name, &records)?;
            Ok(deleted)
        })?;

        debug!("Deleted {} records from '{}'", deleted, table_name);
        Ok(QueryResultSet::status(format!(
            "{} row{} deleted",
            deleted,
            plural(deleted)
        )))
    }

    fn execute_create(&self, create: CreateStatement) -> QueryResult<QueryResultSet> {
        let table_name = &create.table_name;

        self.locks.with_catalog(|| -> QueryResult<()> {
            let mut catalog = self.storage.load_catalog()?;
            self.locks
                .with_table(table_name, || self.storage.save_table(table_name, &[]))?;
            ddl_executor::create_table(&mut catalog, &create);
            self.storage.save_catalog(&catalog)?;
            Ok(())
        })?;

        info!("Created table '{}' with {} columns", table_name, create.columns.len());
        Ok(QueryResultSet::status(format!("Table {} created", table_name)))
    }

    fn execute_drop(&self, drop: DropStatement) -> QueryResult<QueryResultSet> {
        let table_name = &drop.table_name;

        self.locks.with_catalog(|| -> QueryResult<()> {
            let mut catalog = self.storage.load_catalog()?;
            let in_catalog = ddl_executor::drop_table(&mut catalog, table_name);

            let file_removed = self.locks.with_table(table_name, || {
                if self.storage.table_exists(table_name) {
                    self.storage.delete_table(table_name).map(|_| true)
                } else {
                    Ok(false)
                }
            })?;
            self.locks.forget_table(table_name);

            if !in_catalog && !file_removed {
                return Err(QueryError::TableNotFound(table_name.to_string()));
            }
            if in_catalog {
                self.storage.save_catalog(&catalog)?;
            }
            Ok(())
        })?;

        info!("Dropped table '{}'", table_name);
        Ok(QueryResultSet::status(format!("Table {} dropped", table_name)))
    }
}

/// Result columns for `SELECT *`: the declared columns, followed by any
/// undeclared field found in the rows, in first-seen order
fn wildcard_columns(mut columns: Vec<String>, rows: &[Row]) -> Vec<String> {
    for row in rows {
        for column in row.columns() {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
    }
    columns
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
