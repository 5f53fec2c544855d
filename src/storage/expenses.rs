//! Per-user expense files
//!
//! Each user owns one file, `<username>_expenses.csv`, one expense per line
//! in insertion order. Every mutation overwrites the whole file; the line
//! index is the record's external identifier.

use std::path::{Path, PathBuf};

use crate::error::PocketbookResult;
use crate::models::Expense;

use super::file_io::{exists, read_lines, write_all_lines};

/// Repository over one user's expense file
pub struct ExpenseStore {
    path: PathBuf,
}

/// Result of loading an expense file
pub struct LoadedExpenses {
    /// Records in file (= display) order
    pub expenses: Vec<Expense>,
    /// Lines skipped because they did not parse. Skipping drops data on
    /// the next save; callers report the count.
    pub skipped: usize,
}

impl ExpenseStore {
    /// Create a store over the given expense file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The underlying file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the user has an expense file yet
    pub fn exists(&self) -> bool {
        exists(&self.path)
    }

    /// Load all expenses; a missing file loads as empty
    pub fn load(&self) -> PocketbookResult<LoadedExpenses> {
        let mut expenses = Vec::new();
        let mut skipped = 0;

        for line in read_lines(&self.path)? {
            match Expense::from_record_line(&line) {
                Ok(exp) => expenses.push(exp),
                Err(_) => skipped += 1,
            }
        }

        Ok(LoadedExpenses { expenses, skipped })
    }

    /// Overwrite the file with the full expense list
    pub fn save(&self, expenses: &[Expense]) -> PocketbookResult<()> {
        let lines: Vec<String> = expenses.iter().map(Expense::to_record_line).collect();
        write_all_lines(&self.path, &lines)
    }
}
