//! Expense categories
//!
//! Categories are a fixed enumerated set. The display name doubles as the
//! field value in the expense record file, so it must stay stable.

use std::fmt;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Essentials,
    Transportation,
    Entertainment,
    Clothing,
    Health,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Essentials,
        Category::Transportation,
        Category::Entertainment,
        Category::Clothing,
        Category::Health,
        Category::Other,
    ];

    /// Parse a category from user input or a record field (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "essentials" => Some(Category::Essentials),
            "transportation" | "transport" => Some(Category::Transportation),
            "entertainment" => Some(Category::Entertainment),
            "clothing" => Some(Category::Clothing),
            "health" => Some(Category::Health),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// Stable name used in the record file
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Essentials => "Essentials",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Clothing => "Clothing",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse("FOOD"), Some(Category::Food));
        assert_eq!(Category::parse(" Essentials "), Some(Category::Essentials));
        assert_eq!(Category::parse("groceries"), None);
    }

    #[test]
    fn test_round_trip_all() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
    }
}
