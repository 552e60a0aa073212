//! Numeric parsing and formatting policy for amounts.
//!
//! Parsing never fails: empty or malformed input resolves to exactly zero, so
//! a bad amount cannot block record creation or poison balance computation.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Strips thousands separators and parses a decimal amount. Empty or
/// non-numeric input yields `Decimal::ZERO`.
pub fn parse_amount(input: &str) -> Decimal {
    let clean = input.trim().replace(',', "");
    if clean.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&clean).unwrap_or(Decimal::ZERO)
}

/// Renders an amount with exactly two fractional digits and `en-US` style
/// thousands grouping, e.g. `1,234.50`. Display and export only.
pub fn format_amount(n: Decimal) -> String {
    let fixed = format!(
        "{:.2}",
        n.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    );
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}
