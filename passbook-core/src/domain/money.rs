//! Amount parsing and display formatting

use std::str::FromStr;

use rust_decimal::Decimal;

use super::result::{Error, Result};

/// Parse a textual amount into a `Decimal`
///
/// All textual input crosses into the domain here. Anything that is not a
/// plain decimal number is rejected as `InvalidAmount`; `Decimal` has no
/// NaN or infinity, so a successful parse is always a finite quantity.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .map_err(|_| Error::invalid_amount(format!("not a number: {trimmed:?}")))
}

/// Format an amount as dollars with exactly two decimal places
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}
