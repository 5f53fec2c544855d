//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod admin;
pub mod expense;

pub use account::{handle_limit_command, handle_register, handle_rewards_command, LimitCommands, RewardsCommands};
pub use admin::{handle_admin_command, AdminCommands};
pub use expense::{
    handle_add, handle_delete, handle_edit, handle_export, handle_list, handle_restore,
    handle_summary,
};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::User;
use crate::services::{CredentialService, Ledger};
use crate::storage::Storage;

/// Authenticate from the global `--user` / `--password` arguments
pub fn login(
    storage: &Storage,
    user: Option<&str>,
    password: Option<&str>,
) -> PocketbookResult<User> {
    let username = user.ok_or_else(|| {
        PocketbookError::Validation(
            "missing --user (or POCKETBOOK_USER environment variable)".to_string(),
        )
    })?;
    let password = password.ok_or_else(|| {
        PocketbookError::Validation(
            "missing --password (or POCKETBOOK_PASSWORD environment variable)".to_string(),
        )
    })?;

    CredentialService::new(storage).authenticate(username, password)
}

/// Open a user's ledger, warning about any unparseable lines in their file
pub fn open_ledger(storage: &Storage, user: User) -> PocketbookResult<Ledger<'_>> {
    let ledger = Ledger::open(storage, user)?;
    if ledger.skipped_lines() > 0 {
        eprintln!(
            "Warning: skipped {} unparseable line(s) in the expense file; they will be dropped on the next write.",
            ledger.skipped_lines()
        );
    }
    Ok(ledger)
}
