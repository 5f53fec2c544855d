//! Storage layer for pocketbook
//!
//! Flat delimited text files, one record per line, with atomic full-file
//! rewrites and automatic directory creation.

pub mod accounts;
pub mod expenses;
pub mod file_io;

pub use accounts::AccountStore;
pub use expenses::{ExpenseStore, LoadedExpenses};
pub use file_io::{append_line, exists, read_lines, write_all_lines};

use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;

/// Main storage coordinator
pub struct Storage {
    paths: PocketbookPaths,
    pub accounts: AccountStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PocketbookPaths) -> Result<Self, PocketbookError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountStore::new(paths.account_store_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketbookPaths {
        &self.paths
    }

    /// Open the expense store for a given user
    pub fn expenses_for(&self, username: &str) -> ExpenseStore {
        ExpenseStore::new(self.paths.expense_file(username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.expenses_for("alice").exists());
    }
}
