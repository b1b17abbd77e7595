// DDL Executor
//
// Catalog changes for CREATE TABLE and DROP TABLE.

use log::warn;

use crate::catalog::{Catalog, Table};
use crate::query::parser::ast::CreateStatement;

/// Build a table definition from CREATE TABLE column definitions
pub fn table_from_definition(create: &CreateStatement) -> Table {
    Table::new(
        create
            .columns
            .iter()
            .map(|col| (col.name.clone(), col.data_type.clone()))
            .collect(),
    )
}

/// Register the table in the catalog. An existing definition with the same
/// name is replaced; returns whether that happened.
pub fn create_table(catalog: &mut Catalog, create: &CreateStatement) -> bool {
    let replaced = catalog
        .create_table(&create.table_name, table_from_definition(create))
        .is_some();
    if replaced {
        warn!("Table '{}' already existed and was replaced", create.table_name);
    }
    replaced
}

/// Remove the table from the catalog, returning whether it was there
pub fn drop_table(catalog: &mut Catalog, table_name: &str) -> bool {
    catalog.drop_table(table_name).is_some()
}
