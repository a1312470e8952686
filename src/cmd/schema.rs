//! Schema command - print the format of the saved state

use crate::state::{AppState, DATA_KEY, THEME_KEY};
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the saved state blob
    JsonSchema,
    /// Field descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(AppState);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Saved state ({DATA_KEY}.json)");
        println!("=================================");
        println!();
        for (name, description) in STATE_FIELD_DESCRIPTIONS {
            println!("{:16}  {}", name, description);
        }
        println!();
        println!("Theme preference ({THEME_KEY}.json): light or dark");
        Ok(())
    }
}

const STATE_FIELD_DESCRIPTIONS: &[(&str, &str)] = &[
    ("ageGroup", "student, professional, senior, or empty"),
    ("monthlyBudget", "Monthly budget, 0 when unset"),
    (
        "expenses",
        "List of {id, category, amount, note, date}; id is a millisecond timestamp",
    ),
    ("chartType", "bar or pie"),
    (
        "tax",
        "{income, annualTax, effectiveRate}; only income is read back",
    ),
];
