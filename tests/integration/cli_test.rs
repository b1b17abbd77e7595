use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use anyhow::Result;

fn jsondb(data_dir: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_jsondb"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn query(data_dir: &Path, sql: &str) -> Result<String> {
    let output = jsondb(data_dir, &["query", sql])?;
    assert!(
        output.status.success(),
        "query {:?} failed: {}",
        sql,
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8(output.stdout)?)
}

/// Test that the CLI can execute statements one invocation at a time
#[test]
fn test_cli_query_execution() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let data_dir = temp_dir.path();

    assert_eq!(query(data_dir, "CREATE TABLE users (id INTEGER, name TEXT)")?.trim(), "Table users created");
    assert_eq!(
        query(data_dir, "INSERT INTO users VALUES (1, 'Ann'), (2, 'Bob')")?.trim(),
        "2 rows inserted"
    );

    let output = query(data_dir, "SELECT id, name FROM users WHERE id > 1")?;
    assert!(output.contains("| id | name  |"), "Column header not found: {}", output);
    assert!(output.contains("| 2  | \"Bob\" |"), "Row not found: {}", output);
    assert!(output.contains("(1 row)"), "Row count not found: {}", output);

    assert!(data_dir.join("users.json").is_file());
    assert!(data_dir.join(".schema.json").is_file());
    Ok(())
}

/// Test JSON output format
#[test]
fn test_cli_json_format() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let data_dir = temp_dir.path();

    query(data_dir, "CREATE TABLE t (a INTEGER, b TEXT)")?;
    query(data_dir, "INSERT INTO t (a, b) VALUES (1, 'x')")?;

    let output = jsondb(data_dir, &["--format", "json", "query", "SELECT * FROM t"])?;
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(rows, serde_json::json!([{"a": 1, "b": "x"}]));
    Ok(())
}

/// Test that failures are reported with a non-zero exit status
#[test]
fn test_cli_reports_errors() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    let output = jsondb(temp_dir.path(), &["query", "SELECT a FROM missing"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("missing"));

    let output = jsondb(temp_dir.path(), &["query", "SELEC a FROM t"])?;
    assert!(!output.status.success());
    Ok(())
}

/// Test that the info command lists tables and columns
#[test]
fn test_cli_info_command() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let data_dir = temp_dir.path();

    query(data_dir, "CREATE TABLE users (id INTEGER, name TEXT)")?;
    query(data_dir, "INSERT INTO users (id) VALUES (1)")?;

    let output = jsondb(data_dir, &["info"])?;
    assert!(output.status.success(), "CLI info command failed");

    let output_str = String::from_utf8(output.stdout)?;
    assert!(output_str.contains("jsondb Information:"), "Expected info output not found");
    assert!(output_str.contains("users (1 records)"), "Table not listed: {}", output_str);
    assert!(output_str.contains("name TEXT"), "Column not listed: {}", output_str);
    Ok(())
}

/// Test the CLI shell functionality with input redirection
#[test]
fn test_cli_shell_interaction() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    let mut child = Command::new(env!("CARGO_BIN_EXE_jsondb"))
        .current_dir(temp_dir.path())
        .arg("--data-dir")
        .arg(temp_dir.path().join("db"))
        .arg("shell")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(b"CREATE TABLE t (a INTEGER)\nINSERT INTO t VALUES (5)\nSELECT a FROM t\nexit\n")?;
    }

    let output = child.wait_with_output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Table t created"), "Unexpected shell output: {}", stdout);
    assert!(stdout.contains("| 5 |"), "Unexpected shell output: {}", stdout);
    assert!(stdout.contains("Goodbye!"));
    Ok(())
}
