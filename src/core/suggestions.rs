//! Savings suggestions derived from spending patterns

use super::aggregate::CategoryTotals;
use super::budget::LOW_BALANCE_SHARE;
use super::expense::Category;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suggestion {
    StartTracking,
    CookAtHome,
    CheaperEntertainment,
    DelayShopping,
    Balanced,
    BudgetExceeded,
    NearBudgetLimit,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::StartTracking => {
                "Start tracking your expenses to get personalized savings suggestions!"
            }
            Suggestion::CookAtHome => {
                "You're spending a lot on food. Plan meals & cook more at home."
            }
            Suggestion::CheaperEntertainment => {
                "Entertainment is high. Try free/low-cost options."
            }
            Suggestion::DelayShopping => {
                "Shopping is heavy. Use a 24‑hour wait before non-essentials."
            }
            Suggestion::Balanced => {
                "Spending looks balanced! Consider investing 10–15% this month."
            }
            Suggestion::BudgetExceeded => {
                "You've exceeded your monthly budget. Review & trim a category."
            }
            Suggestion::NearBudgetLimit => {
                "Close to budget limit. Be mindful for the rest of the month."
            }
        }
    }
}

/// Category share thresholds above which a pattern suggestion fires
const PATTERN_RULES: [(Category, Decimal, Suggestion); 3] = [
    (Category::Food, dec!(0.3), Suggestion::CookAtHome),
    (Category::Entertainment, dec!(0.2), Suggestion::CheaperEntertainment),
    (Category::Shopping, dec!(0.25), Suggestion::DelayShopping),
];

pub fn suggest(totals: &CategoryTotals, monthly_budget: Decimal) -> Vec<Suggestion> {
    if totals.is_empty() {
        return vec![Suggestion::StartTracking];
    }

    let total = totals.total();
    let mut suggestions: Vec<Suggestion> = PATTERN_RULES
        .iter()
        .filter(|(category, share, _)| {
            totals
                .get(*category)
                .is_some_and(|spent| spent > Decimal::ZERO && spent > total * *share)
        })
        .map(|(_, _, suggestion)| *suggestion)
        .collect();

    if suggestions.is_empty() {
        suggestions.push(Suggestion::Balanced);
    }

    if monthly_budget > Decimal::ZERO {
        let remaining = monthly_budget - total;
        if remaining < Decimal::ZERO {
            suggestions.push(Suggestion::BudgetExceeded);
        } else if remaining < monthly_budget * LOW_BALANCE_SHARE {
            suggestions.push(Suggestion::NearBudgetLimit);
        }
    }

    suggestions
}
