//! Account store
//!
//! One record per line: `username,password,balance,rewardPoints,dailyLimit,isAdmin`.
//! Lookups are a linear scan. Mutations rewrite the whole file, replacing
//! the matching record in place; unrelated lines (including ones that do
//! not parse) are carried through untouched.

use std::path::PathBuf;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::User;

use super::file_io::{append_line, read_lines, write_all_lines};

/// Repository over the shared account file
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// Create a store over the given account file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn username_of(line: &str) -> &str {
        line.split(',').next().unwrap_or("")
    }

    /// Find a user by username
    ///
    /// Returns `Corrupt` if the matching record exists but one of its
    /// numeric fields cannot be parsed; other records are not inspected.
    pub fn find(&self, username: &str) -> PocketbookResult<Option<User>> {
        for line in read_lines(&self.path)? {
            if Self::username_of(&line) == username {
                let user = User::from_record_line(&line).map_err(|e| {
                    PocketbookError::Corrupt {
                        file: self.path.display().to_string(),
                        detail: e.to_string(),
                    }
                })?;
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    /// Check whether a username is already taken
    pub fn contains(&self, username: &str) -> PocketbookResult<bool> {
        Ok(read_lines(&self.path)?
            .iter()
            .any(|line| Self::username_of(line) == username))
    }

    /// Append a new account record
    pub fn append(&self, user: &User) -> PocketbookResult<()> {
        append_line(&self.path, &user.to_record_line())
    }

    /// Rewrite the store, replacing the record matching the user's username
    ///
    /// There is no append fast path for updates: the whole file is scanned
    /// and overwritten.
    pub fn update(&self, user: &User) -> PocketbookResult<()> {
        let mut lines = read_lines(&self.path)?;
        let mut replaced = false;

        for line in lines.iter_mut() {
            if Self::username_of(line) == user.username {
                *line = user.to_record_line();
                replaced = true;
                break;
            }
        }

        if !replaced {
            return Err(PocketbookError::Storage(format!(
                "No account record for '{}' to update",
                user.username
            )));
        }

        write_all_lines(&self.path, &lines)
    }

    /// Load every parseable account record
    ///
    /// Returns the users plus the count of lines that were skipped because
    /// they did not parse. Skipping can silently drop data; callers are
    /// expected to report the count.
    pub fn load_all(&self) -> PocketbookResult<(Vec<User>, usize)> {
        let mut users = Vec::new();
        let mut skipped = 0;

        for line in read_lines(&self.path)? {
            match User::from_record_line(&line) {
                Ok(user) => users.push(user),
                Err(_) => skipped += 1,
            }
        }

        Ok((users, skipped))
    }
}
