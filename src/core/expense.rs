use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Spending category for an expense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Health,
    Education,
    Other,
}

impl Category {
    /// Lowercase identifier, as stored
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Bills => "bills",
            Category::Health => "health",
            Category::Education => "education",
            Category::Other => "other",
        }
    }

    /// Capitalised display label (e.g. "Food")
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    /// Note used when the user leaves the note blank
    pub fn default_note(self) -> String {
        format!("{} expense", self.label())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single logged expense. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExpenseRecord {
    /// Creation timestamp in milliseconds, unique and increasing
    pub id: i64,
    pub category: Category,
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub amount: Decimal,
    pub note: String,
    /// Locale formatted calendar date (M/D/YYYY)
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_note_is_capitalised() {
        assert_eq!(Category::Entertainment.default_note(), "Entertainment expense");
        assert_eq!(Category::Other.default_note(), "Other expense");
    }

    #[test]
    fn record_serialises_amount_as_number() {
        let record = ExpenseRecord {
            id: 1_700_000_000_000,
            category: Category::Food,
            amount: dec!(120.5),
            note: "Lunch".to_string(),
            date: "1/15/2025".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "food");
        assert_eq!(json["amount"], serde_json::json!(120.5));

        let back: ExpenseRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
