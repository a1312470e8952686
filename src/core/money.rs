use rust_decimal::Decimal;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount with the currency symbol, thousands separators and
/// at most three fractional digits, e.g. `₹1,234.5`
pub fn display_amount(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{CURRENCY_SYMBOL}{}", group_thousands(amount.abs()))
}

fn group_thousands(amount: Decimal) -> String {
    let s = amount.round_dp(3).normalize().to_string();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{grouped}.{frac}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_thousands() {
        assert_eq!(display_amount(dec!(0)), "₹0");
        assert_eq!(display_amount(dec!(999)), "₹999");
        assert_eq!(display_amount(dec!(1000)), "₹1,000");
        assert_eq!(display_amount(dec!(1200000)), "₹1,200,000");
    }

    #[test]
    fn trims_fraction() {
        assert_eq!(display_amount(dec!(1234.50)), "₹1,234.5");
        assert_eq!(display_amount(dec!(10.12345)), "₹10.123");
        assert_eq!(display_amount(dec!(75.000)), "₹75");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(display_amount(dec!(-2500)), "-₹2,500");
    }
}
