//! Core data models for pocketbook

pub mod category;
pub mod expense;
pub mod money;
pub mod user;

pub use category::Category;
pub use expense::{Expense, RecordParseError, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
pub use user::{User, STARTING_BALANCE};
