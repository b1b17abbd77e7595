// JSON File Store
//
// Each table lives in `<data_dir>/<table>.json` as an array of records and
// the catalog lives in `<data_dir>/.schema.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use super::error::{StorageError, StorageResult};
use super::record::Record;
use super::{validate_table_name, Storage};
use crate::catalog::Catalog;

/// Configuration for a [`JsonStore`]
#[derive(Debug, Clone)]
pub struct JsonStoreConfig {
    /// Directory holding the table and catalog documents
    pub data_dir: PathBuf,
    /// File name of the catalog document inside `data_dir`
    pub catalog_file_name: String,
    /// Write indented JSON
    pub pretty: bool,
}

impl Default for JsonStoreConfig {
    fn default() -> Self {
        JsonStoreConfig {
            data_dir: PathBuf::from("db"),
            catalog_file_name: ".schema.json".to_string(),
            pretty: false,
        }
    }
}

impl JsonStoreConfig {
    /// Default configuration rooted at `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        JsonStoreConfig {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }
}

/// Storage backed by one JSON document per table
#[derive(Debug)]
pub struct JsonStore {
    config: JsonStoreConfig,
}

impl JsonStore {
    /// Open a store, creating the data directory and an empty catalog
    /// document when they do not exist yet
    pub fn open(config: JsonStoreConfig) -> StorageResult<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let store = JsonStore { config };
        let catalog_path = store.catalog_path();
        if !catalog_path.exists() {
            fs::write(&catalog_path, "{}")?;
            info!("Created empty catalog at {}", catalog_path.display());
        }

        info!("Opened JSON store at {}", store.config.data_dir.display());
        Ok(store)
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    fn catalog_path(&self) -> PathBuf {
        self.config.data_dir.join(&self.config.catalog_file_name)
    }

    fn table_path(&self, table_name: &str) -> StorageResult<PathBuf> {
        validate_table_name(table_name)?;
        Ok(self.config.data_dir.join(format!("{}.json", table_name)))
    }

    fn write_document<T: Serialize + ?Sized>(&self, path: &Path, document: &T) -> StorageResult<()> {
        let text = if self.config.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        fs::write(path, text)?;
        Ok(())
    }
}

impl Storage for JsonStore {
    fn load_table(&self, table_name: &str) -> StorageResult<Vec<Record>> {
        let path = self.table_path(table_name)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::TableNotFound(table_name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<Record> = serde_json::from_str(&text)?;
        debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    fn save_table(&self, table_name: &str, records: &[Record]) -> StorageResult<()> {
        let path = self.table_path(table_name)?;
        self.write_document(&path, records)?;
        debug!("Saved {} records to {}", records.len(), path.display());
        Ok(())
    }

    fn delete_table(&self, table_name: &str) -> StorageResult<()> {
        let path = self.table_path(table_name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::TableNotFound(table_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn table_exists(&self, table_name: &str) -> bool {
        self.table_path(table_name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn load_catalog(&self) -> StorageResult<Catalog> {
        match fs::read_to_string(self.catalog_path()) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Catalog::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save_catalog(&self, catalog: &Catalog) -> StorageResult<()> {
        self.write_document(&self.catalog_path(), catalog)
    }
}
