//! Expense record model
//!
//! An expense is never hard-deleted: `delete` sets the `deleted` flag and
//! `restore` clears it. The record's position in its user's expense file is
//! its external identifier.
//!
//! Record line format: `date,name,category,amount,deleted(0|1)`. Fields are
//! not quoted or escaped, so a name containing the delimiter will not
//! round-trip. This is a known limitation of the file format, kept for
//! compatibility rather than silently repaired.

use chrono::NaiveDate;
use std::fmt;

use super::{Category, Money};

/// Date format used in record files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Calendar day the expense occurred
    pub date: NaiveDate,
    /// Short description
    pub name: String,
    /// One of the fixed category set
    pub category: Category,
    /// Positive amount spent
    pub amount: Money,
    /// Soft-delete flag
    pub deleted: bool,
}

impl Expense {
    /// Create a new (non-deleted) expense
    pub fn new(date: NaiveDate, name: impl Into<String>, category: Category, amount: Money) -> Self {
        Self {
            date,
            name: name.into(),
            category,
            amount,
            deleted: false,
        }
    }

    /// Encode as one line of the expense record file
    pub fn to_record_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.date.format(DATE_FORMAT),
            self.name,
            self.category,
            self.amount.to_record_field(),
            if self.deleted { 1 } else { 0 },
        )
    }

    /// Decode one line of the expense record file
    pub fn from_record_line(line: &str) -> Result<Self, RecordParseError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 5 {
            return Err(RecordParseError::FieldCount {
                expected: 5,
                found: fields.len(),
            });
        }

        let date = NaiveDate::parse_from_str(fields[0], DATE_FORMAT)
            .map_err(|_| RecordParseError::Field("date", fields[0].to_string()))?;
        let name = fields[1].to_string();
        let category = Category::parse(fields[2])
            .ok_or_else(|| RecordParseError::Field("category", fields[2].to_string()))?;
        let amount = Money::parse(fields[3])
            .map_err(|_| RecordParseError::Field("amount", fields[3].to_string()))?;
        let deleted = match fields[4] {
            "0" => false,
            "1" => true,
            other => return Err(RecordParseError::Field("deleted", other.to_string())),
        };

        Ok(Self {
            date,
            name,
            category,
            amount,
            deleted,
        })
    }
}

/// Error decoding a record line; malformed lines are skipped on load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordParseError {
    FieldCount { expected: usize, found: usize },
    Field(&'static str, String),
}

impl fmt::Display for RecordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordParseError::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            RecordParseError::Field(name, value) => {
                write!(f, "bad {} field: '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for RecordParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Lunch",
            Category::Food,
            Money::from_cents(1250),
        )
    }

    #[test]
    fn test_encode() {
        assert_eq!(sample().to_record_line(), "2024-01-01,Lunch,Food,12.50,0");

        let mut deleted = sample();
        deleted.deleted = true;
        assert_eq!(deleted.to_record_line(), "2024-01-01,Lunch,Food,12.50,1");
    }

    #[test]
    fn test_round_trip() {
        let exp = sample();
        let parsed = Expense::from_record_line(&exp.to_record_line()).unwrap();
        assert_eq!(parsed, exp);
    }

    #[test]
    fn test_bad_field_count() {
        let err = Expense::from_record_line("2024-01-01,Lunch,Food").unwrap_err();
        assert!(matches!(err, RecordParseError::FieldCount { found: 3, .. }));
    }

    #[test]
    fn test_bad_amount() {
        let err = Expense::from_record_line("2024-01-01,Lunch,Food,abc,0").unwrap_err();
        assert!(matches!(err, RecordParseError::Field("amount", _)));

        let err = Expense::from_record_line("2024-01-01,Lunch,Food,1.€€,0").unwrap_err();
        assert!(matches!(err, RecordParseError::Field("amount", _)));
    }

    #[test]
    fn test_delimiter_in_name_does_not_round_trip() {
        let mut exp = sample();
        exp.name = "Lunch, with dessert".to_string();
        // The extra comma shifts the field boundaries; the line is rejected.
        assert!(Expense::from_record_line(&exp.to_record_line()).is_err());
    }
}
