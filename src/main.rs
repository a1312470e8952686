use clap::{Parser, Subcommand};

use crate::cmd::chart::ChartCommand;
use crate::cmd::expenses::{AddCommand, DeleteCommand, ListCommand};
use crate::cmd::persona::{PersonaCommand, TipsCommand};
use crate::cmd::schema::SchemaCommand;
use crate::cmd::summary::{BudgetCommand, SuggestCommand, SummaryCommand};
use crate::cmd::tax::TaxCommand;
use crate::cmd::theme::ThemeCommand;
use crate::cmd::GlobalOpts;

mod cmd;
mod core;
mod paint;
mod state;
mod storage;

#[derive(Parser, Debug)]
#[command(
    name = "smartpocket",
    version,
    about = "Personal budgeting: track expenses, get savings tips, chart spending and estimate income tax"
)]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Select an age-group persona and show its tips
    Persona(PersonaCommand),
    /// Show savings tips for the selected persona
    Tips(TipsCommand),
    /// Set the monthly budget
    Budget(BudgetCommand),
    /// Log an expense
    Add(AddCommand),
    /// Delete an expense by id
    Delete(DeleteCommand),
    /// List recent expenses
    List(ListCommand),
    /// Budget, spend and remaining balance
    Summary(SummaryCommand),
    /// Savings suggestions from spending patterns
    Suggest(SuggestCommand),
    /// Chart spend by category
    Chart(ChartCommand),
    /// Estimate annual income tax
    Tax(TaxCommand),
    /// Show or change the colour theme
    Theme(ThemeCommand),
    /// Print the saved state format
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    if let Command::Schema(schema) = &cli.command {
        return schema.exec();
    }

    let mut session = cli.opts.open_session();
    match &cli.command {
        Command::Persona(cmd) => cmd.exec(&mut session),
        Command::Tips(cmd) => cmd.exec(&session),
        Command::Budget(cmd) => cmd.exec(&mut session),
        Command::Add(cmd) => cmd.exec(&mut session),
        Command::Delete(cmd) => cmd.exec(&mut session),
        Command::List(cmd) => cmd.exec(&session),
        Command::Summary(cmd) => cmd.exec(&session),
        Command::Suggest(cmd) => cmd.exec(&session),
        Command::Chart(cmd) => cmd.exec(&mut session),
        Command::Tax(cmd) => cmd.exec(&mut session),
        Command::Theme(cmd) => cmd.exec(&mut session),
        Command::Schema(cmd) => cmd.exec(),
    }
}
