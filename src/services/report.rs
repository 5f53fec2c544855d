//! Admin reporting
//!
//! Read-only scans over the account store and every user's expense file.
//! Nothing here mutates state.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Expense, User};
use crate::storage::Storage;

/// One user's expense file, as loaded for a report
pub struct UserExpenses {
    pub username: String,
    pub expenses: Vec<Expense>,
    /// Unparseable lines dropped while loading this user's file
    pub skipped: usize,
}

/// Service for admin-only reporting
pub struct ReportService<'a> {
    storage: &'a Storage,
}

impl<'a> ReportService<'a> {
    /// Create a new report service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List every account in the store
    ///
    /// Returns the accounts plus the count of skipped unparseable lines.
    pub fn all_accounts(&self, requester: &User) -> PocketbookResult<(Vec<User>, usize)> {
        self.require_admin(requester)?;
        self.storage.accounts.load_all()
    }

    /// List every user's expenses
    ///
    /// Users without an expense file yet appear with an empty list.
    pub fn all_expenses(&self, requester: &User) -> PocketbookResult<Vec<UserExpenses>> {
        self.require_admin(requester)?;

        let (users, _) = self.storage.accounts.load_all()?;
        let mut reports = Vec::with_capacity(users.len());

        for user in users {
            let loaded = self.storage.expenses_for(&user.username).load()?;
            reports.push(UserExpenses {
                username: user.username,
                expenses: loaded.expenses,
                skipped: loaded.skipped,
            });
        }

        Ok(reports)
    }

    fn require_admin(&self, requester: &User) -> PocketbookResult<()> {
        if requester.is_admin {
            Ok(())
        } else {
            Err(PocketbookError::NotAdmin)
        }
    }
}
