use anyhow::Result;
use jsondb::query::executor::result::QueryError;
use jsondb::storage::Storage;

// Declare the common module for test utilities using a path attribute
#[path = "../common/mod.rs"]
mod common;
use common::{column_values, create_test_engine, create_users_table, int, run_all, text};

#[test]
fn test_range_filter_with_and() -> Result<()> {
    let (engine, _store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;

    let result = engine.execute_query("SELECT id, age FROM users WHERE age > 20 AND age < 30")?;

    assert_eq!(result.row_count(), 1);
    assert_eq!(result.rows()[0].get("id"), Some(&int(3)));
    assert_eq!(result.rows()[0].get("age"), Some(&int(25)));
    Ok(())
}

#[test]
fn test_or_keeps_storage_order() -> Result<()> {
    let (engine, _store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;

    let result = engine.execute_query("SELECT id FROM users WHERE age = 20 OR age = 30")?;
    assert_eq!(column_values(&result, "id"), vec![int(1), int(2)]);
    Ok(())
}

#[test]
fn test_order_by_direction() -> Result<()> {
    let (engine, _store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;

    let result = engine.execute_query("SELECT age FROM users ORDER BY age ASC")?;
    assert_eq!(column_values(&result, "age"), vec![int(30), int(25), int(20)]);

    let result = engine.execute_query("SELECT age FROM users ORDER BY age")?;
    assert_eq!(column_values(&result, "age"), vec![int(30), int(25), int(20)]);

    let result = engine.execute_query("SELECT age FROM users ORDER BY age DESC")?;
    assert_eq!(column_values(&result, "age"), vec![int(20), int(25), int(30)]);
    Ok(())
}

#[test]
fn test_order_then_paginate() -> Result<()> {
    let (engine, _store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;

    let result = engine.execute_query("SELECT id FROM users ORDER BY age ASC LIMIT 1 OFFSET 1")?;
    assert_eq!(result.columns(), &["id"]);
    assert_eq!(result.row_count(), 1);
    assert_eq!(result.rows()[0].get("id"), Some(&int(3)));
    assert_eq!(result.rows()[0].len(), 1);

    let result = engine.execute_query("SELECT id FROM users LIMIT 10 OFFSET 5")?;
    assert_eq!(result.row_count(), 0);
    Ok(())
}

#[test]
fn test_wildcard_hides_identifier() -> Result<()> {
    let (engine, _store, _dir) = create_test_engine()?;
    run_all(
        &engine,
        &["CREATE TABLE t (a INTEGER, b INTEGER)", "INSERT INTO t (a, b) VALUES (1, 2)"],
    )?;

    let result = engine.execute_query("SELECT * FROM t")?;
    assert_eq!(result.columns(), &["a", "b"]);
    assert_eq!(result.to_json(false)?, r#"[{"a":1,"b":2}]"#);
    Ok(())
}

#[test]
fn test_wildcard_ignores_where_order_and_limit() -> Result<()> {
    let (engine, _store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;

    let result = engine.execute_query("SELECT * FROM users WHERE age > 100 ORDER BY age DESC LIMIT 1")?;
    assert_eq!(column_values(&result, "id"), vec![int(1), int(2), int(3)]);
    Ok(())
}

#[test]
fn test_delete_ignores_where() -> Result<()> {
    let (engine, store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;

    let result = engine.execute_query("DELETE FROM users WHERE id = 1")?;
    assert_eq!(result.message(), Some("3 rows deleted"));
    assert!(store.load_table("users")?.is_empty());

    let result = engine.execute_query("SELECT id FROM users")?;
    assert_eq!(result.row_count(), 0);
    Ok(())
}

#[test]
fn test_update_rewrites_every_record() -> Result<()> {
    let (engine, store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;
    let ids_before: Vec<_> = store.load_table("users")?.into_iter().map(|r| r.id).collect();

    let result = engine.execute_query("UPDATE users SET age = 40, city = 'Oslo' WHERE id = 2")?;
    assert_eq!(result.message(), Some("3 rows updated"));

    let records = store.load_table("users")?;
    let ids_after: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids_before, ids_after);
    for record in &records {
        assert_eq!(record.get("age"), Some(&int(40)));
        assert_eq!(record.get("city"), Some(&text("Oslo")));
    }
    Ok(())
}

#[test]
fn test_equality_is_strict_and_is_is_loose() -> Result<()> {
    let (engine, _store, _dir) = create_test_engine()?;
    run_all(
        &engine,
        &[
            "CREATE TABLE items (id INTEGER, code TEXT, note TEXT)",
            "INSERT INTO items (id, code, note) VALUES (1, '5', NULL)",
            "INSERT INTO items (id, code) VALUES (2, 5)",
        ],
    )?;

    // '5' and 5 are different under =
    let result = engine.execute_query("SELECT id FROM items WHERE code = 5")?;
    assert_eq!(column_values(&result, "id"), vec![int(2)]);

    // IS NULL matches both null and absent fields
    let result = engine.execute_query("SELECT id FROM items WHERE note IS NULL")?;
    assert_eq!(column_values(&result, "id"), vec![int(1), int(2)]);

    // An absent field never satisfies =, but does satisfy !=
    let result = engine.execute_query("SELECT id FROM items WHERE note = NULL")?;
    assert_eq!(column_values(&result, "id"), vec![int(1)]);
    let result = engine.execute_query("SELECT id FROM items WHERE note != NULL")?;
    assert_eq!(column_values(&result, "id"), vec![int(2)]);
    Ok(())
}

#[test]
fn test_unsupported_operator_selects_nothing() -> Result<()> {
    let (engine, _store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;

    let result = engine.execute_query("SELECT id FROM users WHERE age >= 20")?;
    assert_eq!(result.row_count(), 0);

    // OR with a degraded branch still returns the other branch
    let result = engine.execute_query("SELECT id FROM users WHERE age <= 30 OR id = 3")?;
    assert_eq!(column_values(&result, "id"), vec![int(3)]);
    Ok(())
}

#[test]
fn test_insert_uses_declared_column_order() -> Result<()> {
    let (engine, store, _dir) = create_test_engine()?;
    run_all(
        &engine,
        &["CREATE TABLE people (name TEXT, age INTEGER)", "INSERT INTO people VALUES ('Ann', 31.0)"],
    )?;

    let records = store.load_table("people")?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("name"), Some(&text("Ann")));
    // Integral floats are stored as integers
    assert_eq!(records[0].get("age"), Some(&int(31)));
    Ok(())
}

#[test]
fn test_create_replaces_existing_table() -> Result<()> {
    let (engine, store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;

    engine.execute_query("CREATE TABLE users (name TEXT)")?;

    assert!(store.load_table("users")?.is_empty());
    assert_eq!(store.load_catalog()?.column_names("users"), vec!["name".to_string()]);
    Ok(())
}

#[test]
fn test_drop_table() -> Result<()> {
    let (engine, store, _dir) = create_test_engine()?;
    create_users_table(&engine)?;

    let result = engine.execute_query("DROP TABLE users")?;
    assert_eq!(result.message(), Some("Table users dropped"));
    assert!(!store.table_exists("users"));
    assert!(!store.load_catalog()?.table_exists("users"));

    assert!(matches!(
        engine.execute_query("DROP TABLE users"),
        Err(QueryError::TableNotFound(ref name)) if name == "users"
    ));
    assert!(matches!(
        engine.execute_query("SELECT id FROM users"),
        Err(QueryError::TableNotFound(_))
    ));
    Ok(())
}

#[test]
fn test_tables_next_to_unlisted_types() -> Result<()> {
    let (engine, store, dir) = create_test_engine()?;
    std::fs::write(
        dir.path().join(".schema.json"),
        r#"{"u": {"a": "INT"}, "v": {"b": "TINYINT"}}"#,
    )?;
    std::fs::write(dir.path().join("u.json"), r#"[{"id": "r1", "value": {"a": 1}}]"#)?;

    engine.execute_query("INSERT INTO u VALUES (2)")?;
    let result = engine.execute_query("SELECT * FROM u")?;
    assert_eq!(column_values(&result, "a"), vec![int(1), int(2)]);

    engine.execute_query("CREATE TABLE w (x BLOB)")?;
    engine.execute_query("INSERT INTO w VALUES ('raw')")?;
    assert_eq!(store.load_table("w")?[0].get("x"), Some(&text("raw")));
    Ok(())
}

#[test]
fn test_data_survives_reopen() -> Result<()> {
    let (engine, store, dir) = create_test_engine()?;
    create_users_table(&engine)?;
    drop(engine);
    drop(store);

    let store = std::sync::Arc::new(jsondb::storage::JsonStore::open(
        jsondb::storage::JsonStoreConfig::with_data_dir(dir.path()),
    )?);
    let engine = jsondb::ExecutionEngine::new(store);
    let result = engine.execute_query("SELECT age FROM users ORDER BY age DESC")?;
    assert_eq!(column_values(&result, "age"), vec![int(20), int(25), int(30)]);
    Ok(())
}
