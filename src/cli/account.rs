//! Account CLI commands
//!
//! Registration, daily limit management, and reward point commands.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_summary, format_daily_limit};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Money, User};
use crate::services::CredentialService;
use crate::storage::Storage;

/// Daily limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Set the daily spending limit (whole currency units, 0 to remove)
    Set {
        /// Limit amount, e.g. 50
        amount: i64,
    },
    /// Show the current daily limit
    Show,
}

/// Reward point subcommands
#[derive(Subcommand)]
pub enum RewardsCommands {
    /// Show the current reward point balance
    Show,
    /// Redeem points as account credit (1 point = 1.00)
    Redeem {
        /// Number of points to redeem
        points: i64,
    },
}

/// Handle the `register` command
pub fn handle_register(
    storage: &Storage,
    settings: &Settings,
    username: &str,
    password: &str,
) -> PocketbookResult<()> {
    let user = CredentialService::new(storage).register(username, password)?;

    println!("Registered account: {}", user.username);
    println!(
        "  Starting balance: {}",
        user.balance.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle a `limit` command
pub fn handle_limit_command(
    storage: &Storage,
    settings: &Settings,
    user: User,
    cmd: LimitCommands,
) -> PocketbookResult<()> {
    match cmd {
        LimitCommands::Set { amount } => {
            let mut ledger = super::open_ledger(storage, user)?;
            ledger.set_daily_limit(amount)?;
            if amount == 0 {
                println!("Daily limit removed.");
            } else {
                println!(
                    "Daily limit set to {}.",
                    Money::from_units(amount).format_with_symbol(&settings.currency_symbol)
                );
            }
        }
        LimitCommands::Show => {
            print!("{}", format_daily_limit(&user, &settings.currency_symbol));
        }
    }

    Ok(())
}

/// Handle a `rewards` command
pub fn handle_rewards_command(
    storage: &Storage,
    settings: &Settings,
    user: User,
    cmd: RewardsCommands,
) -> PocketbookResult<()> {
    match cmd {
        RewardsCommands::Show => {
            println!(
                "Reward points for {}: {}",
                user.username, user.reward_points
            );
        }
        RewardsCommands::Redeem { points } => {
            let mut ledger = super::open_ledger(storage, user)?;
            let credited = ledger.redeem_points(points)?;
            let symbol = &settings.currency_symbol;
            println!(
                "Redeemed {} point(s) for {}. New balance: {}",
                points,
                credited.format_with_symbol(symbol),
                ledger.user().balance.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Handle the account `summary` view shared by several commands
pub fn print_account_summary(user: &User, symbol: &str) {
    print!("{}", format_account_summary(user, symbol));
}

/// Reject the synthetic admin identity for ledger commands
///
/// The admin account has no backing record or expense file, so mutating
/// commands cannot operate on it.
pub fn require_member(user: &User) -> PocketbookResult<()> {
    if user.is_admin {
        Err(PocketbookError::Validation(
            "the admin account has no ledger; use 'admin accounts' or 'admin expenses'".to_string(),
        ))
    } else {
        Ok(())
    }
}
