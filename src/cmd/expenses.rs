//! Expense commands - add, delete and list

use super::CategoryArg;
use crate::core::{display_amount, recent_expenses, Category, ExpenseRecord};
use crate::state::Session;
use crate::storage::Storage;
use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Expenses shown by `list` unless `--all` is given
const RECENT_LIMIT: usize = 10;

#[derive(Args, Debug)]
pub struct AddCommand {
    /// Expense category
    #[arg(value_enum)]
    category: CategoryArg,

    /// Amount spent (must be positive)
    #[arg(allow_negative_numbers = true)]
    amount: Decimal,

    /// Optional note; defaults to "<Category> expense"
    #[arg(short, long, default_value = "")]
    note: String,
}

impl AddCommand {
    pub fn exec<S: Storage>(&self, session: &mut Session<S>) -> anyhow::Result<()> {
        let category: Category = self.category.into();
        let record = session.add_expense(category, self.amount, &self.note)?;
        println!(
            "Added {} \u{2022} {} (id {})",
            display_amount(record.amount),
            record.category,
            record.id
        );
        super::summary::print_suggestions(&session.suggestions());
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeleteCommand {
    /// Id of the expense to remove (see `list`)
    id: i64,
}

impl DeleteCommand {
    pub fn exec<S: Storage>(&self, session: &mut Session<S>) -> anyhow::Result<()> {
        let removed = session.delete_expense(self.id)?;
        println!(
            "Expense removed: {} {}",
            removed.category.label(),
            display_amount(removed.amount)
        );
        super::summary::print_suggestions(&session.suggestions());
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListCommand {
    /// Show every expense instead of the most recent ten
    #[arg(long)]
    all: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

impl ListCommand {
    pub fn exec<S: Storage>(&self, session: &Session<S>) -> anyhow::Result<()> {
        let limit = if self.all { None } else { Some(RECENT_LIMIT) };
        let expenses = recent_expenses(&session.state().expenses, limit);

        if self.csv {
            write_csv(&expenses).context("failed to write expenses as CSV")
        } else {
            print_table(&expenses);
            Ok(())
        }
    }
}

/// Row for the expenses table output
#[derive(Debug, Clone, Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Id")]
    id: i64,

    #[tabled(rename = "Date")]
    date: String,

    #[tabled(rename = "Category")]
    category: &'static str,

    #[tabled(rename = "Note")]
    note: String,

    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&ExpenseRecord> for ExpenseRow {
    fn from(record: &ExpenseRecord) -> Self {
        ExpenseRow {
            id: record.id,
            date: record.date.clone(),
            category: record.category.label(),
            note: record.note.clone(),
            amount: display_amount(record.amount),
        }
    }
}

fn print_table(expenses: &[&ExpenseRecord]) {
    if expenses.is_empty() {
        println!("No expenses recorded yet");
        return;
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(|e| ExpenseRow::from(*e)).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

fn write_csv(expenses: &[&ExpenseRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for expense in expenses {
        wtr.serialize(expense)?;
    }
    wtr.flush()?;
    Ok(())
}
