//! Admin CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::format_account_table;
use crate::display::report::format_all_expenses;
use crate::error::PocketbookResult;
use crate::models::User;
use crate::services::ReportService;
use crate::storage::Storage;

/// Admin subcommands (require the admin credentials)
#[derive(Subcommand)]
pub enum AdminCommands {
    /// List every registered account
    Accounts,
    /// List every user's expense history
    Expenses,
}

/// Handle an `admin` command
pub fn handle_admin_command(
    storage: &Storage,
    settings: &Settings,
    requester: &User,
    cmd: AdminCommands,
) -> PocketbookResult<()> {
    let service = ReportService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        AdminCommands::Accounts => {
            let (accounts, skipped) = service.all_accounts(requester)?;
            print!("{}", format_account_table(&accounts, skipped, symbol));
        }
        AdminCommands::Expenses => {
            let reports = service.all_expenses(requester)?;
            print!("{}", format_all_expenses(&reports, symbol));
        }
    }

    Ok(())
}
