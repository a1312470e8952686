//! Tax command - estimate annual income tax from the slab table

use crate::core::tax::{TAX_SLABS, REBATE_THRESHOLD};
use crate::core::{display_amount, TaxEstimate};
use crate::state::Session;
use crate::storage::Storage;
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct TaxCommand {
    /// Annual income; when omitted the last entered income is used
    #[arg(allow_negative_numbers = true)]
    income: Option<Decimal>,

    /// Also print the slab table
    #[arg(long)]
    slabs: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Tax data for JSON output
#[derive(Debug, Serialize)]
struct TaxData {
    income: String,
    annual_tax: String,
    monthly_tax: String,
    effective_rate_pct: String,
}

impl TaxCommand {
    pub fn exec<S: Storage>(&self, session: &mut Session<S>) -> anyhow::Result<()> {
        let estimate = match self.income {
            Some(income) => session.set_tax_income(income)?,
            None => session.tax_estimate(),
        };

        if self.json {
            let data = TaxData {
                income: format!("{:.2}", estimate.income),
                annual_tax: format!("{:.2}", estimate.annual_tax),
                monthly_tax: format!("{:.2}", estimate.monthly_tax()),
                effective_rate_pct: format!("{:.2}", estimate.effective_rate * dec!(100)),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print_estimate(&estimate);
            if self.slabs {
                print_slabs();
            }
        }
        Ok(())
    }
}

fn print_estimate(estimate: &TaxEstimate) {
    println!();
    println!("TAX ESTIMATE");
    if estimate.income <= Decimal::ZERO {
        println!("  No income entered yet: smartpocket tax <annual income>");
        println!();
        return;
    }
    println!("  Income: {}", display_amount(estimate.income));
    println!(
        "  Annual tax: {} | Monthly: {}",
        display_amount(estimate.annual_tax.round_dp(2)),
        display_amount(estimate.monthly_tax().round_dp(2))
    );
    println!(
        "  Effective rate: {:.2}%",
        estimate.effective_rate * dec!(100)
    );
    if estimate.income <= REBATE_THRESHOLD {
        println!(
            "  Income up to {} is fully rebated",
            display_amount(REBATE_THRESHOLD)
        );
    }
    println!();
}

fn print_slabs() {
    println!("SLABS");
    let mut lower = Decimal::ZERO;
    for slab in TAX_SLABS.iter() {
        let rate = slab.rate * dec!(100);
        match slab.upper_bound {
            Some(upper) => {
                println!(
                    "  {} - {}: {:.0}%",
                    display_amount(lower),
                    display_amount(upper),
                    rate
                );
                lower = upper;
            }
            None => println!("  {} and above: {:.0}%", display_amount(lower), rate),
        }
    }
    println!();
}
