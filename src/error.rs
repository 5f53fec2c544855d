//! Custom error types for pocketbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Validation and business-rule errors are
//! recoverable: the offending operation is simply not applied.

use thiserror::Error;

use crate::models::Money;

/// The main error type for pocketbook operations
#[derive(Error, Debug)]
pub enum PocketbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A numeric field in a stored record could not be parsed
    #[error("Corrupt record in {file}: {detail}")]
    Corrupt { file: String, detail: String },

    /// Username already taken at registration
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Command requires the admin identity
    #[error("Operation requires admin privileges")]
    NotAdmin,

    /// Expense amount must be strictly positive
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Money),

    /// Spending more than the available balance
    #[error("Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Money, available: Money },

    /// Accepted spend would push today's total past the daily limit
    #[error("Daily limit exceeded: today's total {today_total} + {amount} is over the limit of {limit}")]
    DailyLimitExceeded {
        today_total: Money,
        amount: Money,
        limit: Money,
    },

    /// Expense index out of range
    #[error("No expense at index {0}")]
    InvalidIndex(usize),

    /// Operation not allowed on a soft-deleted expense
    #[error("Expense at index {0} is deleted")]
    AlreadyDeleted(usize),

    /// Restore called on an expense that is not deleted
    #[error("Expense at index {0} is not deleted")]
    NotDeleted(usize),

    /// Daily limit must be non-negative
    #[error("Daily limit cannot be negative: {0}")]
    NegativeLimit(i64),

    /// Reward redemption must be for a positive point count
    #[error("Points to redeem must be positive, got {0}")]
    NonPositivePoints(i64),

    /// Redeeming more points than are held
    #[error("Insufficient reward points: need {needed}, have {available}")]
    InsufficientPoints { needed: i64, available: i64 },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PocketbookError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::NonPositiveAmount(_)
                | Self::NegativeLimit(_)
                | Self::NonPositivePoints(_)
        )
    }

    /// Check if this is a business-rule rejection (state untouched)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InsufficientBalance { .. }
                | Self::DailyLimitExceeded { .. }
                | Self::DuplicateUsername(_)
                | Self::InvalidIndex(_)
                | Self::AlreadyDeleted(_)
                | Self::NotDeleted(_)
                | Self::InsufficientPoints { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PocketbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for pocketbook operations
pub type PocketbookResult<T> = Result<T, PocketbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PocketbookError::DuplicateUsername("alice".into());
        assert_eq!(err.to_string(), "Username already exists: alice");
    }

    #[test]
    fn test_insufficient_balance_display() {
        let err = PocketbookError::InsufficientBalance {
            needed: Money::from_cents(10000),
            available: Money::from_cents(8750),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: need $100.00, have $87.50"
        );
    }

    #[test]
    fn test_classification() {
        assert!(PocketbookError::NonPositiveAmount(Money::zero()).is_validation());
        assert!(PocketbookError::InvalidIndex(3).is_rejection());
        assert!(!PocketbookError::Io("boom".into()).is_rejection());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PocketbookError = io_err.into();
        assert!(matches!(err, PocketbookError::Io(_)));
    }
}
