use super::expense::ExpenseRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Share of the budget below which the remaining balance counts as low
pub const LOW_BALANCE_SHARE: Decimal = dec!(0.1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Healthy,
    Low,
    Over,
}

impl BudgetStatus {
    pub fn classify(budget: Decimal, remaining: Decimal) -> BudgetStatus {
        if remaining < Decimal::ZERO {
            BudgetStatus::Over
        } else if remaining < budget * LOW_BALANCE_SHARE {
            BudgetStatus::Low
        } else {
            BudgetStatus::Healthy
        }
    }
}

/// Running totals for the month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSummary {
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub status: BudgetStatus,
}

impl BudgetSummary {
    pub fn from_state(budget: Decimal, expenses: &[ExpenseRecord]) -> Self {
        let spent: Decimal = expenses.iter().map(|e| e.amount).sum();
        let remaining = budget - spent;
        BudgetSummary {
            budget,
            spent,
            remaining,
            status: BudgetStatus::classify(budget, remaining),
        }
    }
}

/// Most recent expenses first, by id
pub fn recent_expenses(expenses: &[ExpenseRecord], limit: Option<usize>) -> Vec<&ExpenseRecord> {
    let mut recent: Vec<_> = expenses.iter().collect();
    recent.sort_by(|a, b| b.id.cmp(&a.id));
    if let Some(limit) = limit {
        recent.truncate(limit);
    }
    recent
}
