//! Admin report formatting

use crate::display::expense::format_expense_list;
use crate::services::UserExpenses;

/// Format every user's expense history, for the admin report
pub fn format_all_expenses(reports: &[UserExpenses], symbol: &str) -> String {
    if reports.is_empty() {
        return "No accounts found.".to_string();
    }

    let mut output = String::new();
    for report in reports {
        output.push_str(&format!("=== {} ===\n", report.username));
        output.push_str(&format_expense_list(&report.expenses, true, symbol));
        if report.skipped > 0 {
            output.push_str(&format!(
                "Warning: skipped {} unparseable line(s).\n",
                report.skipped
            ));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_format_all_expenses() {
        let reports = vec![
            UserExpenses {
                username: "alice".to_string(),
                expenses: vec![Expense::new(
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    "Lunch",
                    Category::Food,
                    Money::parse("12.50").unwrap(),
                )],
                skipped: 0,
            },
            UserExpenses {
                username: "bob".to_string(),
                expenses: Vec::new(),
                skipped: 2,
            },
        ];

        let output = format_all_expenses(&reports, "$");
        assert!(output.contains("=== alice ==="));
        assert!(output.contains("Lunch"));
        assert!(output.contains("=== bob ==="));
        assert!(output.contains("No expenses found"));
        assert!(output.contains("skipped 2 unparseable line(s)"));
    }

    #[test]
    fn test_format_no_accounts() {
        assert!(format_all_expenses(&[], "$").contains("No accounts found"));
    }
}
