use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::EnvFilter;

use jsondb::query::executor::engine::ExecutionEngine;
use jsondb::query::executor::result::QueryResultSet;
use jsondb::storage::{JsonStore, JsonStoreConfig, Storage};

const HISTORY_FILE: &str = ".jsondb_history";

#[derive(Parser)]
#[command(author, version, about = "jsondb CLI - run SQL against a directory of JSON tables")]
struct Cli {
    /// Directory holding the table documents and the catalog
    #[arg(short, long, env = "JSONDB_DATA_DIR", default_value = "db")]
    data_dir: PathBuf,

    /// Indent JSON written to disk and printed with --format json
    #[arg(long)]
    pretty: bool,

    /// Output format for query results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Log filter, overrides RUST_LOG (e.g. "debug" or "jsondb=info")
    #[arg(long)]
    log_level: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell
    Shell,

    /// Execute a SQL query directly
    Query {
        /// SQL query to execute
        query: String,
    },

    /// Show database information
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Database instance with all required components
struct Database {
    store: Arc<JsonStore>,
    execution_engine: ExecutionEngine,
    format: OutputFormat,
    pretty: bool,
}

impl Database {
    fn open(cli: &Cli) -> Result<Self> {
        let config = JsonStoreConfig {
            pretty: cli.pretty,
            ..JsonStoreConfig::with_data_dir(&cli.data_dir)
        };
        let store = Arc::new(JsonStore::open(config)?);
        let execution_engine = ExecutionEngine::new(store.clone());

        Ok(Database {
            store,
            execution_engine,
            format: cli.format,
            pretty: cli.pretty,
        })
    }

    fn execute_query(&self, query: &str) -> Result<String> {
        let result = self.execution_engine.execute_query(query)?;
        self.render(&result)
    }

    fn render(&self, result: &QueryResultSet) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(result.to_string_table()),
            OutputFormat::Json => Ok(result.to_json(self.pretty)?),
        }
    }

    fn print_info(&self) -> Result<()> {
        let catalog = self.store.load_catalog()?;

        println!("jsondb Information:");
        println!("  Data directory: {}", self.store.data_dir().display());
        println!("  Tables: {}", catalog.len());

        for name in catalog.table_names() {
            let records = if self.store.table_exists(&name) {
                self.store.load_table(&name)?.len()
            } else {
                0
            };
            println!("  {} ({} records)", name, records);

            if let Some(table) = catalog.get_table(&name) {
                for (column, data_type) in table.columns() {
                    println!("    {} {}", column, data_type);
                }
            }
        }
        Ok(())
    }
}

fn init_logging(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Logs go to stderr so query output on stdout stays parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_shell(db: &Database) -> Result<()> {
    println!("Welcome to jsondb. Type 'help' for assistance or 'exit' to quit.");

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !matches!(&err, ReadlineError::Io(io) if io.kind() == std::io::ErrorKind::NotFound) {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        match rl.readline("jsondb> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => print_help(),
                    "info" => {
                        if let Err(err) = db.print_info() {
                            println!("Error: {:#}", err);
                        }
                    }
                    _ => match db.execute_query(line) {
                        Ok(output) => println!("{}", output),
                        Err(err) => println!("Error: {:#}", err),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  CREATE TABLE <name> (<col> <type>, ...)    - Create (or replace) a table");
    println!("  DROP TABLE <name>                          - Drop a table");
    println!("  INSERT INTO <table> [(cols)] VALUES (...)  - Insert one or more rows");
    println!("  SELECT <cols|*> FROM <table>               - Query a table");
    println!("      [WHERE ...] [ORDER BY col [ASC|DESC]] [LIMIT n [OFFSET m]]");
    println!("  UPDATE <table> SET col = value, ...        - Update every row of a table");
    println!("  DELETE FROM <table>                        - Delete every row of a table");
    println!();
    println!("Other commands:");
    println!("  info                                       - List tables and columns");
    println!("  help                                       - Display this help message");
    println!("  exit                                       - Exit the CLI");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let db = Database::open(&cli)
        .with_context(|| format!("Failed to open database at {}", cli.data_dir.display()))?;

    match &cli.command {
        Some(Commands::Query { query }) => {
            let output = db.execute_query(query).context("Error executing query")?;
            println!("{}", output);
        }
        Some(Commands::Info) => db.print_info()?,
        // Default to shell if no command is specified
        Some(Commands::Shell) | None => run_shell(&db)?,
    }

    Ok(())
}
