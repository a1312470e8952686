//! Summary command - budget, spend and remaining balance with suggestions

use crate::core::{display_amount, BudgetStatus, Suggestion};
use crate::state::Session;
use crate::storage::Storage;
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct BudgetCommand {
    /// Monthly budget (must be positive)
    #[arg(allow_negative_numbers = true)]
    amount: rust_decimal::Decimal,
}

impl BudgetCommand {
    pub fn exec<S: Storage>(&self, session: &mut Session<S>) -> anyhow::Result<()> {
        session.set_budget(self.amount)?;
        println!("Budget set to {}", display_amount(self.amount));
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct SummaryCommand {
    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    persona: Option<String>,
    monthly_budget: String,
    total_expenses: String,
    remaining: String,
    status: BudgetStatus,
    expense_count: usize,
    by_category: Vec<CategoryTotal>,
    suggestions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct CategoryTotal {
    category: String,
    amount: String,
}

impl SummaryCommand {
    pub fn exec<S: Storage>(&self, session: &Session<S>) -> anyhow::Result<()> {
        if self.json {
            self.print_json(session)
        } else {
            self.print_summary(session);
            Ok(())
        }
    }

    fn print_summary<S: Storage>(&self, session: &Session<S>) {
        let summary = session.summary();
        let status = match summary.status {
            BudgetStatus::Healthy => "on track",
            BudgetStatus::Low => "running low",
            BudgetStatus::Over => "over budget",
        };

        println!();
        match session.state().age_group {
            Some(persona) => println!("BUDGET SUMMARY ({})", persona.label()),
            None => println!("BUDGET SUMMARY"),
        }
        println!();
        println!("  Budget: {}", display_amount(summary.budget));
        println!("  Spent: {}", display_amount(summary.spent));
        println!(
            "  Remaining: {} ({})",
            display_amount(summary.remaining),
            status
        );
        println!();

        let totals = session.totals();
        if !totals.is_empty() {
            println!("BY CATEGORY");
            for (category, amount) in totals.iter() {
                println!("  {}: {}", category.label(), display_amount(amount));
            }
            println!();
        }

        print_suggestions(&session.suggestions());
    }

    fn print_json<S: Storage>(&self, session: &Session<S>) -> anyhow::Result<()> {
        let summary = session.summary();
        let state = session.state();
        let data = SummaryData {
            persona: state.age_group.map(|p| p.label().to_string()),
            monthly_budget: format!("{:.2}", summary.budget),
            total_expenses: format!("{:.2}", summary.spent),
            remaining: format!("{:.2}", summary.remaining),
            status: summary.status,
            expense_count: state.expenses.len(),
            by_category: session
                .totals()
                .iter()
                .map(|(category, amount)| CategoryTotal {
                    category: category.to_string(),
                    amount: format!("{:.2}", amount),
                })
                .collect(),
            suggestions: session
                .suggestions()
                .into_iter()
                .map(Suggestion::message)
                .collect(),
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct SuggestCommand {}

impl SuggestCommand {
    pub fn exec<S: Storage>(&self, session: &Session<S>) -> anyhow::Result<()> {
        print_suggestions(&session.suggestions());
        Ok(())
    }
}

pub fn print_suggestions(suggestions: &[Suggestion]) {
    println!("SAVINGS SUGGESTIONS");
    for suggestion in suggestions {
        println!("  - {}", suggestion.message());
    }
    println!();
}
