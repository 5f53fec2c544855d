//! Expense CLI commands
//!
//! Implements add, list, edit, delete, restore, summary, and export.

use std::fs::File;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::display::expense::{format_expense_list, format_search_results, format_summary};
use crate::error::{PocketbookError, PocketbookResult};
use crate::export::export_expenses_csv;
use crate::models::{Category, Money, User, DATE_FORMAT};
use crate::storage::Storage;

/// Handle the `add` command
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    user: User,
    name: &str,
    category: &str,
    amount: &str,
    date: Option<&str>,
) -> PocketbookResult<()> {
    let category = parse_category(category)?;
    let amount = parse_amount(amount)?;
    let date = parse_date(date)?;

    let mut ledger = super::open_ledger(storage, user)?;
    let expense = ledger.add_expense(name, category, amount, date)?;
    let symbol = &settings.currency_symbol;

    println!(
        "Added expense: {} ({}) {}",
        expense.name,
        expense.category,
        expense.amount.format_with_symbol(symbol)
    );
    println!(
        "  New balance: {}",
        ledger.user().balance.format_with_symbol(symbol)
    );
    println!("  Reward points: {}", ledger.user().reward_points);
    Ok(())
}

/// Handle the `list` command
pub fn handle_list(
    storage: &Storage,
    settings: &Settings,
    user: User,
    all: bool,
    search: Option<&str>,
) -> PocketbookResult<()> {
    let ledger = super::open_ledger(storage, user)?;
    let symbol = &settings.currency_symbol;

    match search {
        Some(query) => {
            let results = ledger.search(query);
            print!("{}", format_search_results(&results, symbol));
        }
        None => {
            print!("{}", format_expense_list(ledger.expenses(), all, symbol));
        }
    }

    Ok(())
}

/// Handle the `edit` command
///
/// Omitted flags keep the expense's current value.
pub fn handle_edit(
    storage: &Storage,
    settings: &Settings,
    user: User,
    index: usize,
    name: Option<&str>,
    category: Option<&str>,
    amount: Option<&str>,
) -> PocketbookResult<()> {
    let mut ledger = super::open_ledger(storage, user)?;

    let current = ledger
        .expenses()
        .get(index)
        .ok_or(PocketbookError::InvalidIndex(index))?;

    let name = name.unwrap_or(&current.name).to_string();
    let category = match category {
        Some(s) => parse_category(s)?,
        None => current.category,
    };
    let amount = match amount {
        Some(s) => parse_amount(s)?,
        None => current.amount,
    };

    ledger.edit_expense(index, &name, category, amount)?;

    println!("Updated expense {}.", index);
    println!(
        "  New balance: {}",
        ledger
            .user()
            .balance
            .format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle the `delete` command
pub fn handle_delete(
    storage: &Storage,
    settings: &Settings,
    user: User,
    index: usize,
) -> PocketbookResult<()> {
    let mut ledger = super::open_ledger(storage, user)?;
    ledger.delete_expense(index)?;

    println!("Deleted expense {} (kept on file; restorable).", index);
    println!(
        "  New balance: {}",
        ledger
            .user()
            .balance
            .format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle the `restore` command
pub fn handle_restore(
    storage: &Storage,
    settings: &Settings,
    user: User,
    index: usize,
) -> PocketbookResult<()> {
    let mut ledger = super::open_ledger(storage, user)?;
    let restored = ledger.restore_expense(index)?;
    let symbol = &settings.currency_symbol;

    println!("Restored expense {}.", index);
    if restored.overdraft_clamped {
        println!(
            "Warning: the restored amount exceeded the available balance; balance clamped to {}.",
            Money::zero().format_with_symbol(symbol)
        );
    }
    println!(
        "  New balance: {}",
        ledger.user().balance.format_with_symbol(symbol)
    );
    Ok(())
}

/// Handle the `summary` command
pub fn handle_summary(storage: &Storage, settings: &Settings, user: User) -> PocketbookResult<()> {
    let ledger = super::open_ledger(storage, user)?;
    let symbol = &settings.currency_symbol;

    super::account::print_account_summary(ledger.user(), symbol);
    println!();
    print!(
        "{}",
        format_summary(&ledger.category_totals(), &ledger.monthly_totals(), symbol)
    );
    Ok(())
}

/// Handle the `export` command
pub fn handle_export(storage: &Storage, user: User, output: &Path) -> PocketbookResult<()> {
    let ledger = super::open_ledger(storage, user)?;

    let mut file = File::create(output)?;
    export_expenses_csv(ledger.expenses(), &mut file)?;

    println!(
        "Exported {} expense(s) to {}",
        ledger.expenses().len(),
        output.display()
    );
    Ok(())
}

fn parse_category(s: &str) -> PocketbookResult<Category> {
    Category::parse(s).ok_or_else(|| {
        let valid: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        PocketbookError::Validation(format!(
            "invalid category '{}'. Valid categories: {}",
            s,
            valid.join(", ")
        ))
    })
}

fn parse_amount(s: &str) -> PocketbookResult<Money> {
    Money::parse(s).map_err(|e| {
        PocketbookError::Validation(format!(
            "invalid amount '{}'. Use a format like '12.50'. {}",
            s, e
        ))
    })
}

fn parse_date(s: Option<&str>) -> PocketbookResult<NaiveDate> {
    match s {
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
            PocketbookError::Validation(format!("invalid date '{}'. Use YYYY-MM-DD.", raw))
        }),
        None => Ok(Local::now().date_naive()),
    }
}
