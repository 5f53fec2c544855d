//! User account model
//!
//! A user owns a balance, a reward-point total, and an optional daily
//! spending limit. Record line format:
//! `username,password,balance,rewardPoints,dailyLimit,isAdmin(0|1)`.
//!
//! The password field is stored and compared as plaintext because that is
//! the on-disk contract of the account store. Real deployments need
//! credential hashing; see DESIGN.md.

use super::expense::RecordParseError;
use super::Money;

/// Starting balance for every new registration
pub const STARTING_BALANCE: Money = Money::from_units(1000);

/// A user account record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique key into the account store
    pub username: String,
    /// Plaintext by file-format contract
    pub password: String,
    /// Current balance
    pub balance: Money,
    /// Reward points, clamped at zero
    pub reward_points: i64,
    /// Daily spending limit in whole currency units; 0 means unlimited
    pub daily_limit: i64,
    /// Admin identities see all accounts; the reserved admin is never
    /// file-backed
    pub is_admin: bool,
}

impl User {
    /// Create a fresh user with registration defaults
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            balance: STARTING_BALANCE,
            reward_points: 0,
            daily_limit: 0,
            is_admin: false,
        }
    }

    /// The daily limit as a Money amount, or None when unlimited
    pub fn daily_limit_amount(&self) -> Option<Money> {
        if self.daily_limit > 0 {
            Some(Money::from_units(self.daily_limit))
        } else {
            None
        }
    }

    /// Encode as one line of the account store
    pub fn to_record_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.username,
            self.password,
            self.balance.to_record_field(),
            self.reward_points,
            self.daily_limit,
            if self.is_admin { 1 } else { 0 },
        )
    }

    /// Decode one line of the account store
    pub fn from_record_line(line: &str) -> Result<Self, RecordParseError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 6 {
            return Err(RecordParseError::FieldCount {
                expected: 6,
                found: fields.len(),
            });
        }

        let balance = Money::parse(fields[2])
            .map_err(|_| RecordParseError::Field("balance", fields[2].to_string()))?;
        let reward_points: i64 = fields[3]
            .parse()
            .map_err(|_| RecordParseError::Field("rewardPoints", fields[3].to_string()))?;
        let daily_limit: i64 = fields[4]
            .parse()
            .map_err(|_| RecordParseError::Field("dailyLimit", fields[4].to_string()))?;
        let is_admin = match fields[5] {
            "0" => false,
            "1" => true,
            other => return Err(RecordParseError::Field("isAdmin", other.to_string())),
        };

        Ok(Self {
            username: fields[0].to_string(),
            password: fields[1].to_string(),
            balance,
            reward_points,
            daily_limit,
            is_admin,
        })
    }
}
