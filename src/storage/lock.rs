// Table Locks
//
// Scoped exclusive locks serializing load-transform-store cycles within one
// process. One lock per table name plus one for the catalog; when both are
// needed the catalog lock is taken first.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Registry of per-table locks
#[derive(Debug, Default)]
pub struct TableLocks {
    catalog: Mutex<()>,
    tables: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl TableLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `table_name`
    pub fn with_table<T>(&self, table_name: &str, f: impl FnOnce() -> T) -> T {
        let lock = self.table_lock(table_name);
        let _guard = lock.lock();
        f()
    }

    /// Run `f` while holding the catalog lock
    pub fn with_catalog<T>(&self, f: impl FnOnce() -> T) -> T {
        let _guard = self.catalog.lock();
        f()
    }

    /// Remove the lock entry for a dropped table. An entry still held or
    /// awaited by another caller is left in place.
    pub fn forget_table(&self, table_name: &str) {
        let mut tables = self.tables.lock();
        if tables.get(table_name).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            tables.remove(table_name);
        }
    }

    #[cfg(test)]
    pub(crate) fn tracked_tables(&self) -> usize {
        self.tables.lock().len()
    }

    fn table_lock(&self, table_name: &str) -> Arc<Mutex<()>> {
        let mut tables = self.tables.lock();
        tables.entry(table_name.to_string()).or_default().clone()
    }
}
