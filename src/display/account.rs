//! Account display formatting

use crate::models::{Money, User};

/// Format a single account's summary view
pub fn format_account_summary(user: &User, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", user.username));
    output.push_str(&format!(
        "  Balance:       {}\n",
        user.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Reward points: {}\n", user.reward_points));

    match user.daily_limit_amount() {
        Some(limit) => output.push_str(&format!(
            "  Daily limit:   {}\n",
            limit.format_with_symbol(symbol)
        )),
        None => output.push_str("  Daily limit:   none\n"),
    }

    output
}

/// Format the daily limit on its own, for `limit show`
pub fn format_daily_limit(user: &User, symbol: &str) -> String {
    match user.daily_limit_amount() {
        Some(limit) => format!(
            "Daily limit for {}: {}\n",
            user.username,
            limit.format_with_symbol(symbol)
        ),
        None => format!("No daily limit set for {}.\n", user.username),
    }
}

/// Format all accounts as a table, for the admin report
pub fn format_account_table(users: &[User], skipped: usize, symbol: &str) -> String {
    if users.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = users
        .iter()
        .map(|u| u.username.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>8}  {:>12}  {}\n",
        "Username",
        "Balance",
        "Points",
        "Daily Limit",
        "Admin",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->8}  {:->12}  {:-<5}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for user in users {
        let limit = match user.daily_limit_amount() {
            Some(amount) => amount.format_with_symbol(symbol),
            None => "none".to_string(),
        };
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>8}  {:>12}  {}\n",
            user.username,
            user.balance.format_with_symbol(symbol),
            user.reward_points,
            limit,
            if user.is_admin { "yes" } else { "no" },
            name_width = name_width,
        ));
    }

    let total_balance: Money = users.iter().map(|u| u.balance).sum();
    output.push_str(&format!(
        "\n{} account(s), combined balance {}\n",
        users.len(),
        total_balance.format_with_symbol(symbol)
    ));

    if skipped > 0 {
        output.push_str(&format!(
            "Warning: skipped {} unparseable line(s) in the account store.\n",
            skipped
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_account_summary() {
        let mut user = User::new("alice", "pw1");
        user.reward_points = 45;
        user.daily_limit = 50;

        let output = format_account_summary(&user, "$");
        assert!(output.contains("alice"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains("Reward points: 45"));
        assert!(output.contains("Daily limit:   $50.00"));
    }

    #[test]
    fn test_format_daily_limit_unset() {
        let user = User::new("alice", "pw1");
        let output = format_daily_limit(&user, "$");
        assert!(output.contains("No daily limit set"));
    }

    #[test]
    fn test_format_account_table() {
        let users = vec![User::new("alice", "pw1"), User::new("bob", "pw2")];
        let output = format_account_table(&users, 1, "$");

        assert!(output.contains("alice"));
        assert!(output.contains("bob"));
        assert!(output.contains("2 account(s), combined balance $2000.00"));
        assert!(output.contains("skipped 1 unparseable line(s)"));
    }

    #[test]
    fn test_format_empty_table() {
        let output = format_account_table(&[], 0, "$");
        assert!(output.contains("No accounts found"));
    }
}
