//! Expense display formatting
//!
//! Formats expense lists and spending summaries for terminal output.

use crate::models::{Category, Expense, Money, DATE_FORMAT};

/// Format expenses as a table
///
/// The index column shows each expense's position in the file, which is the
/// identifier `edit`, `delete`, and `restore` take. When `include_deleted` is
/// false, deleted rows are omitted but the remaining rows keep their original
/// indices.
pub fn format_expense_list(expenses: &[Expense], include_deleted: bool, symbol: &str) -> String {
    format_indexed(
        expenses
            .iter()
            .enumerate()
            .filter(|(_, e)| include_deleted || !e.deleted),
        symbol,
    )
}

/// Format pre-indexed expense rows, e.g. search results
pub fn format_search_results(results: &[(usize, &Expense)], symbol: &str) -> String {
    format_indexed(results.iter().map(|(i, e)| (*i, *e)), symbol)
}

fn format_indexed<'a, I>(rows: I, symbol: &str) -> String
where
    I: Iterator<Item = (usize, &'a Expense)>,
{
    let rows: Vec<(usize, &Expense)> = rows.collect();
    if rows.is_empty() {
        return "No expenses found.".to_string();
    }

    let name_width = rows
        .iter()
        .map(|(_, e)| e.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<10}  {:<name_width$}  {:<14}  {:>12}\n",
        "Index",
        "Date",
        "Name",
        "Category",
        "Amount",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:->5}  {:-<10}  {:-<name_width$}  {:-<14}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    let mut total = Money::zero();
    for (index, expense) in &rows {
        let marker = if expense.deleted { "  (deleted)" } else { "" };
        output.push_str(&format!(
            "{:>5}  {:<10}  {:<name_width$}  {:<14}  {:>12}{}\n",
            index,
            expense.date.format(DATE_FORMAT),
            expense.name,
            expense.category,
            expense.amount.format_with_symbol(symbol),
            marker,
            name_width = name_width,
        ));
        if !expense.deleted {
            total = total + expense.amount;
        }
    }

    output.push_str(&format!(
        "\nTotal spent: {} across {} expense(s)\n",
        total.format_with_symbol(symbol),
        rows.iter().filter(|(_, e)| !e.deleted).count()
    ));

    output
}

/// Format category and monthly spending totals
pub fn format_summary(
    category_totals: &[(Category, Money)],
    monthly_totals: &[(String, Money)],
    symbol: &str,
) -> String {
    if category_totals.is_empty() && monthly_totals.is_empty() {
        return "No expenses to summarize.".to_string();
    }

    let mut output = String::new();

    output.push_str("Spending by category:\n");
    for (category, total) in category_totals {
        output.push_str(&format!(
            "  {:<14}  {:>12}\n",
            category.as_str(),
            total.format_with_symbol(symbol)
        ));
    }

    output.push_str("\nSpending by month:\n");
    for (month, total) in monthly_totals {
        output.push_str(&format!(
            "  {:<14}  {:>12}\n",
            month,
            total.format_with_symbol(symbol)
        ));
    }

    let grand_total: Money = category_totals.iter().map(|(_, m)| *m).sum();
    output.push_str(&format!(
        "\nTotal: {}\n",
        grand_total.format_with_symbol(symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_expenses() -> Vec<Expense> {
        let mut expenses = vec![
            Expense::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                "Lunch",
                Category::Food,
                Money::parse("12.50").unwrap(),
            ),
            Expense::new(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                "Bus pass",
                Category::Transportation,
                Money::parse("40.00").unwrap(),
            ),
        ];
        expenses[1].deleted = true;
        expenses
    }

    #[test]
    fn test_format_expense_list_skips_deleted() {
        let output = format_expense_list(&sample_expenses(), false, "$");
        assert!(output.contains("Lunch"));
        assert!(!output.contains("Bus pass"));
        assert!(output.contains("$12.50"));
        assert!(output.contains("1 expense(s)"));
    }

    #[test]
    fn test_format_expense_list_all_marks_deleted() {
        let output = format_expense_list(&sample_expenses(), true, "$");
        assert!(output.contains("Bus pass"));
        assert!(output.contains("(deleted)"));
        // Deleted entries do not count toward the total
        assert!(output.contains("Total spent: $12.50"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_expense_list(&[], true, "$");
        assert!(output.contains("No expenses found"));
    }

    #[test]
    fn test_format_uses_configured_symbol() {
        let output = format_expense_list(&sample_expenses(), false, "€");
        assert!(output.contains("€12.50"));
        assert!(!output.contains('$'));
    }

    #[test]
    fn test_format_search_results_keeps_indices() {
        let expenses = sample_expenses();
        let results = vec![(1usize, &expenses[1])];
        let output = format_search_results(&results, "$");
        assert!(output.contains("    1  "));
        assert!(output.contains("Bus pass"));
    }

    #[test]
    fn test_format_summary() {
        let categories = vec![
            (Category::Food, Money::parse("12.50").unwrap()),
            (Category::Transportation, Money::parse("40.00").unwrap()),
        ];
        let months = vec![("2024-01".to_string(), Money::parse("52.50").unwrap())];

        let output = format_summary(&categories, &months, "$");
        assert!(output.contains("Food"));
        assert!(output.contains("2024-01"));
        assert!(output.contains("Total: $52.50"));
    }
}
