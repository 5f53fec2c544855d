//! The ledger engine
//!
//! Owns one authenticated user's account state and their ordered expense
//! list, and enforces the balance, daily-limit, and reward-point rules.
//! The expense's position in the list is its external identifier.
//!
//! Every mutating operation updates memory first, then persists the full
//! expense file and rewrites the account store record. A failed write is
//! reported to the caller; the in-memory change is not rolled back, so
//! memory and disk can diverge after an I/O error.

use chrono::NaiveDate;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Category, Expense, Money, User};
use crate::storage::{ExpenseStore, Storage};

/// Outcome of a successful restore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restored {
    /// True when re-deducting the amount would have driven the balance
    /// negative and it was clamped to zero instead. Callers must surface
    /// this: the clamp hides an overdraft.
    pub overdraft_clamped: bool,
}

/// The ledger engine for one authenticated user
pub struct Ledger<'a> {
    storage: &'a Storage,
    expense_store: ExpenseStore,
    user: User,
    expenses: Vec<Expense>,
    skipped_lines: usize,
}

impl<'a> Ledger<'a> {
    /// Open the ledger for an authenticated user, loading their expenses
    pub fn open(storage: &'a Storage, user: User) -> PocketbookResult<Self> {
        let expense_store = storage.expenses_for(&user.username);
        let loaded = expense_store.load()?;

        Ok(Self {
            storage,
            expense_store,
            user,
            expenses: loaded.expenses,
            skipped_lines: loaded.skipped,
        })
    }

    /// The authenticated user
    pub fn user(&self) -> &User {
        &self.user
    }

    /// All expenses in display order, soft-deleted included
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Count of unparseable lines dropped on load. Anything nonzero means
    /// the next save will lose those lines; callers report it.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Sum of non-deleted expenses on the given day
    pub fn day_total(&self, date: NaiveDate) -> Money {
        self.expenses
            .iter()
            .filter(|e| !e.deleted && e.date == date)
            .map(|e| e.amount)
            .sum()
    }

    /// Add an expense dated `today`
    pub fn add_expense(
        &mut self,
        name: &str,
        category: Category,
        amount: Money,
        today: NaiveDate,
    ) -> PocketbookResult<&Expense> {
        if !amount.is_positive() {
            return Err(PocketbookError::NonPositiveAmount(amount));
        }
        if amount > self.user.balance {
            return Err(PocketbookError::InsufficientBalance {
                needed: amount,
                available: self.user.balance,
            });
        }
        if let Some(limit) = self.user.daily_limit_amount() {
            let today_total = self.day_total(today);
            if today_total + amount > limit {
                return Err(PocketbookError::DailyLimitExceeded {
                    today_total,
                    amount,
                    limit,
                });
            }
        }

        self.user.balance -= amount;
        self.apply_reward_delta(amount.reward_points());
        self.expenses
            .push(Expense::new(today, name, category, amount));
        self.persist()?;

        Ok(self.expenses.last().unwrap())
    }

    /// Edit a non-deleted expense in place
    ///
    /// The balance check is on the delta only: shrinking an expense always
    /// succeeds, growing it requires the difference to be covered.
    pub fn edit_expense(
        &mut self,
        index: usize,
        name: &str,
        category: Category,
        new_amount: Money,
    ) -> PocketbookResult<()> {
        let expense = self
            .expenses
            .get(index)
            .ok_or(PocketbookError::InvalidIndex(index))?;
        if expense.deleted {
            return Err(PocketbookError::AlreadyDeleted(index));
        }
        if !new_amount.is_positive() {
            return Err(PocketbookError::NonPositiveAmount(new_amount));
        }

        let delta = new_amount - expense.amount;
        if self.user.balance < delta {
            return Err(PocketbookError::InsufficientBalance {
                needed: delta,
                available: self.user.balance,
            });
        }

        self.user.balance -= delta;
        self.apply_reward_delta(delta.reward_points());

        let expense = &mut self.expenses[index];
        expense.name = name.to_string();
        expense.category = category;
        expense.amount = new_amount;

        self.persist()
    }

    /// Soft-delete an expense, refunding its amount and its points
    pub fn delete_expense(&mut self, index: usize) -> PocketbookResult<()> {
        let expense = self
            .expenses
            .get(index)
            .ok_or(PocketbookError::InvalidIndex(index))?;
        if expense.deleted {
            return Err(PocketbookError::AlreadyDeleted(index));
        }

        let amount = expense.amount;
        self.user.balance += amount;
        self.apply_reward_delta(-amount.reward_points());
        self.expenses[index].deleted = true;

        self.persist()
    }

    /// Restore a soft-deleted expense, re-deducting its amount and
    /// re-adding its points
    ///
    /// If the balance no longer covers the amount, the balance is clamped
    /// to zero and the clamp is reported in the returned `Restored` value.
    pub fn restore_expense(&mut self, index: usize) -> PocketbookResult<Restored> {
        let expense = self
            .expenses
            .get(index)
            .ok_or(PocketbookError::InvalidIndex(index))?;
        if !expense.deleted {
            return Err(PocketbookError::NotDeleted(index));
        }

        let amount = expense.amount;
        let overdraft_clamped = amount > self.user.balance;
        self.user.balance = if overdraft_clamped {
            Money::zero()
        } else {
            self.user.balance - amount
        };
        self.apply_reward_delta(amount.reward_points());
        self.expenses[index].deleted = false;

        self.persist()?;
        Ok(Restored { overdraft_clamped })
    }

    /// Set the daily spending limit in whole currency units (0 = unlimited)
    pub fn set_daily_limit(&mut self, limit: i64) -> PocketbookResult<()> {
        if limit < 0 {
            return Err(PocketbookError::NegativeLimit(limit));
        }
        self.user.daily_limit = limit;
        self.storage.accounts.update(&self.user)
    }

    /// Redeem reward points for balance credit, one point per currency unit
    pub fn redeem_points(&mut self, points: i64) -> PocketbookResult<Money> {
        if points <= 0 {
            return Err(PocketbookError::NonPositivePoints(points));
        }
        if points > self.user.reward_points {
            return Err(PocketbookError::InsufficientPoints {
                needed: points,
                available: self.user.reward_points,
            });
        }

        let credited = Money::from_units(points);
        self.user.reward_points -= points;
        self.user.balance += credited;
        self.storage.accounts.update(&self.user)?;

        Ok(credited)
    }

    /// Case-insensitive substring search over name and date of non-deleted
    /// expenses, preserving original indices
    pub fn search(&self, query: &str) -> Vec<(usize, &Expense)> {
        let query = query.to_lowercase();
        self.expenses
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.deleted)
            .filter(|(_, e)| {
                e.name.to_lowercase().contains(&query)
                    || e.date.format("%Y-%m-%d").to_string().contains(&query)
            })
            .collect()
    }

    /// Total spent per category over non-deleted expenses, in the fixed
    /// category order, zero categories omitted
    pub fn category_totals(&self) -> Vec<(Category, Money)> {
        Category::ALL
            .iter()
            .map(|&cat| {
                let total: Money = self
                    .expenses
                    .iter()
                    .filter(|e| !e.deleted && e.category == cat)
                    .map(|e| e.amount)
                    .sum();
                (cat, total)
            })
            .filter(|(_, total)| !total.is_zero())
            .collect()
    }

    /// Total spent per calendar month ("YYYY-MM") over non-deleted
    /// expenses, sorted by month
    pub fn monthly_totals(&self) -> Vec<(String, Money)> {
        let mut totals: Vec<(String, Money)> = Vec::new();

        for expense in self.expenses.iter().filter(|e| !e.deleted) {
            let month = expense.date.format("%Y-%m").to_string();
            match totals.iter_mut().find(|(m, _)| *m == month) {
                Some((_, total)) => *total += expense.amount,
                None => totals.push((month, expense.amount)),
            }
        }

        totals.sort_by(|a, b| a.0.cmp(&b.0));
        totals
    }

    /// Apply a reward-point delta, clamping the total at zero
    fn apply_reward_delta(&mut self, delta: i64) {
        self.user.reward_points = (self.user.reward_points + delta).max(0);
    }

    /// Persist the full expense list and the account record
    fn persist(&self) -> PocketbookResult<()> {
        self.expense_store.save(&self.expenses)?;
        self.storage.accounts.update(&self.user)
    }
}
