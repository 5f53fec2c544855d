use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pocketbook::cli::{self, AdminCommands, LimitCommands, RewardsCommands};
use pocketbook::config::{paths::PocketbookPaths, settings::Settings};
use pocketbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Flat-file expense tracker with balances, daily limits, and reward points",
    long_about = "Pocketbook is a flat-file expense tracker. Each account starts with a \
                  balance of 1000.00, earns reward points at 5% of net spending, and can \
                  set a daily spending limit. Deleted expenses are kept on file and can \
                  be restored."
)]
struct Cli {
    /// Username (most commands require authentication)
    #[arg(long, global = true, env = "POCKETBOOK_USER")]
    user: Option<String>,

    /// Password
    #[arg(long, global = true, env = "POCKETBOOK_PASSWORD")]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register {
        /// Username (must be unique, no commas)
        username: String,
        /// Password (no commas)
        new_password: String,
    },

    /// Add an expense
    Add {
        /// Expense name
        name: String,
        /// Category (food, essentials, transportation, entertainment, clothing, health, other)
        category: String,
        /// Amount, e.g. 12.50
        amount: String,
        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses
    List {
        /// Include soft-deleted expenses
        #[arg(short, long)]
        all: bool,
        /// Filter by a case-insensitive match on name or date
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Edit an expense by index
    Edit {
        /// Expense index (from `list`)
        index: usize,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short = 'm', long)]
        amount: Option<String>,
    },

    /// Soft-delete an expense by index (refunds the amount)
    Delete {
        /// Expense index (from `list`)
        index: usize,
    },

    /// Restore a soft-deleted expense by index
    Restore {
        /// Expense index (from `list --all`)
        index: usize,
    },

    /// Daily spending limit
    #[command(subcommand)]
    Limit(LimitCommands),

    /// Reward points
    #[command(subcommand)]
    Rewards(RewardsCommands),

    /// Show account and spending summary
    Summary,

    /// Export expenses to a CSV file
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Administrative reports (admin credentials required)
    #[command(subcommand)]
    Admin(AdminCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let Cli {
        user,
        password,
        command,
    } = Cli::parse();

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match command {
        Some(Commands::Register {
            username,
            new_password,
        }) => {
            cli::handle_register(&storage, &settings, &username, &new_password)?;
        }
        Some(Commands::Add {
            name,
            category,
            amount,
            date,
        }) => {
            let user = login_member(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_add(
                &storage,
                &settings,
                user,
                &name,
                &category,
                &amount,
                date.as_deref(),
            )?;
        }
        Some(Commands::List { all, search }) => {
            let user = login_member(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_list(&storage, &settings, user, all, search.as_deref())?;
        }
        Some(Commands::Edit {
            index,
            name,
            category,
            amount,
        }) => {
            let user = login_member(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_edit(
                &storage,
                &settings,
                user,
                index,
                name.as_deref(),
                category.as_deref(),
                amount.as_deref(),
            )?;
        }
        Some(Commands::Delete { index }) => {
            let user = login_member(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_delete(&storage, &settings, user, index)?;
        }
        Some(Commands::Restore { index }) => {
            let user = login_member(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_restore(&storage, &settings, user, index)?;
        }
        Some(Commands::Limit(cmd)) => {
            let user = login_member(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_limit_command(&storage, &settings, user, cmd)?;
        }
        Some(Commands::Rewards(cmd)) => {
            let user = login_member(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_rewards_command(&storage, &settings, user, cmd)?;
        }
        Some(Commands::Summary) => {
            let user = login_member(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_summary(&storage, &settings, user)?;
        }
        Some(Commands::Export { output }) => {
            let user = login_member(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_export(&storage, user, &output)?;
        }
        Some(Commands::Admin(cmd)) => {
            let requester = cli::login(&storage, user.as_deref(), password.as_deref())?;
            cli::handle_admin_command(&storage, &settings, &requester, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Account store:     {}", paths.account_store_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("Pocketbook - flat-file expense tracker");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
            println!("Run 'pocketbook register <username> <password>' to create an account.");
        }
    }

    Ok(())
}

/// Authenticate and reject the synthetic admin identity for ledger commands
fn login_member(
    storage: &Storage,
    user: Option<&str>,
    password: Option<&str>,
) -> Result<pocketbook::models::User> {
    let user = cli::login(storage, user, password)?;
    cli::account::require_member(&user)?;
    Ok(user)
}
