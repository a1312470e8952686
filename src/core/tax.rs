use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Income at or below this amount is fully rebated
pub const REBATE_THRESHOLD: Decimal = dec!(1200000);

/// A contiguous income band taxed at a single rate.
/// `upper_bound` of `None` means the band is open ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSlab {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

const fn slab(upper_bound: Option<Decimal>, rate: Decimal) -> TaxSlab {
    TaxSlab { upper_bound, rate }
}

/// Slab table for the supported tax year, ascending by upper bound
pub const TAX_SLABS: [TaxSlab; 7] = [
    slab(Some(dec!(400000)), dec!(0)),
    slab(Some(dec!(800000)), dec!(0.05)),
    slab(Some(dec!(1200000)), dec!(0.10)),
    slab(Some(dec!(1600000)), dec!(0.15)),
    slab(Some(dec!(2000000)), dec!(0.20)),
    slab(Some(dec!(2400000)), dec!(0.25)),
    slab(None, dec!(0.30)),
];

/// Tax owed on an annual income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxEstimate {
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub annual_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub effective_rate: Decimal,
}

impl TaxEstimate {
    pub fn monthly_tax(&self) -> Decimal {
        self.annual_tax / dec!(12)
    }
}

/// Progressive tax over the slab table, zero at or below the rebate threshold
pub fn calculate_tax(income: Decimal) -> Decimal {
    if income <= Decimal::ZERO || income <= REBATE_THRESHOLD {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut previous_upper = Decimal::ZERO;
    for slab in TAX_SLABS.iter() {
        if income <= previous_upper {
            break;
        }
        let band_top = match slab.upper_bound {
            Some(upper) => income.min(upper),
            None => income,
        };
        let taxable = (band_top - previous_upper).max(Decimal::ZERO);
        tax += taxable * slab.rate;
        log::debug!(
            "Slab up to {:?} @ {}: taxable={}, running tax={}",
            slab.upper_bound,
            slab.rate,
            taxable,
            tax
        );
        match slab.upper_bound {
            Some(upper) => previous_upper = upper,
            None => break,
        }
    }
    tax
}

/// Estimate tax for an income. Non-positive income yields the zero estimate.
pub fn estimate_tax(income: Decimal) -> TaxEstimate {
    let annual_tax = calculate_tax(income);
    let effective_rate = if income > Decimal::ZERO {
        annual_tax / income
    } else {
        Decimal::ZERO
    };
    TaxEstimate {
        income,
        annual_tax,
        effective_rate,
    }
}

/// Estimate from a raw float; NaN, infinite and negative input become zero
pub fn estimate_tax_lossy(income: f64) -> TaxEstimate {
    let income = if income.is_finite() && income > 0.0 {
        Decimal::from_f64(income).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    estimate_tax(income)
}
