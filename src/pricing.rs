//! Prices

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

/// Round an amount to whole cents for display.
///
/// Midpoints round away from zero, matching how shoppers expect a `.5`
/// cent to land.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as a currency string with two decimal places.
pub fn format_price(amount: Decimal, currency: &'static Currency) -> String {
    let rounded = round_for_display(amount);

    match rounded
        .checked_mul(Decimal::new(100, 0))
        .and_then(|minor| minor.to_i64())
    {
        Some(minor_units) => format!("{}", Money::from_minor(minor_units, currency)),
        None => format!("{rounded} {}", currency.iso_alpha_code),
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    #[test]
    fn round_for_display_rounds_half_away_from_zero() {
        assert_eq!(round_for_display(Decimal::new(10_005, 3)), Decimal::new(1001, 2));
        assert_eq!(round_for_display(Decimal::new(10_004, 3)), Decimal::new(1000, 2));
    }

    #[test]
    fn format_price_usd() {
        assert_eq!(format_price(Decimal::new(999, 2), iso::USD), "$9.99");
    }

    #[test]
    fn format_price_zero() {
        assert_eq!(format_price(Decimal::ZERO, iso::USD), "$0.00");
    }

    #[test]
    fn format_price_whole_amount_has_two_places() {
        assert_eq!(format_price(Decimal::new(10, 0), iso::USD), "$10.00");
    }

    #[test]
    fn format_price_single_digit_cents() {
        assert_eq!(format_price(Decimal::new(105, 2), iso::GBP), "£1.05");
    }

    #[test]
    fn format_price_rounds_extra_precision() {
        assert_eq!(format_price(Decimal::new(22_299, 3), iso::USD), "$22.30");
    }
}
