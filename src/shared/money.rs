//! Conversion between API decimal amounts and stored minor units.
//!
//! Amounts are persisted as integers in the smallest currency unit
//! (paise, cents) with two decimal places.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::DomainError;

/// Convert a decimal amount (e.g. `249.99`) to minor units (`24999`).
///
/// Fractions beyond two places are rounded half-away-from-zero.
pub fn to_minor_units(amount: Decimal) -> Result<i64, DomainError> {
    let out_of_range = || DomainError::Validation(format!("Amount out of range: {}", amount));

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(out_of_range)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(out_of_range)
}

/// Convert stored minor units back to a two-place decimal.
pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn rounds_to_two_places() {
        let amount = Decimal::from_str("12.345").unwrap();
        assert_eq!(to_minor_units(amount).unwrap(), 1235);
    }

    #[test]
    fn minor_units_keep_scale() {
        assert_eq!(from_minor_units(24999).to_string(), "249.99");
        assert_eq!(from_minor_units(500).to_string(), "5.00");
    }

    #[test]
    fn huge_amounts_are_rejected() {
        assert!(to_minor_units(Decimal::MAX).is_err());
    }
}
