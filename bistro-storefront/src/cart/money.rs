//! Money calculation utilities using rust_decimal for precision
//!
//! Catalog prices arrive as `f64`; every sum is done in `Decimal` and rounded
//! to 2 decimal places (half away from zero) at the end.

use rust_decimal::prelude::*;
use shared::{CartLine, Item};

/// Rounding strategy for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to cents
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Effective unit price: sale price, else price, else 1
#[inline]
pub fn unit_price(item: &Item) -> Decimal {
    to_decimal(item.unit_price())
}

/// Unit price times quantity, unrounded
pub fn line_amount(item: &Item, quantity: u32) -> Decimal {
    unit_price(item) * Decimal::from(quantity)
}

/// Sum over all lines of unit price times quantity
pub fn cart_total(lines: &[CartLine]) -> Decimal {
    let total: Decimal = lines
        .iter()
        .map(|line| line_amount(&line.item, line.quantity))
        .sum();
    round_money(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_keeps_cents() {
        assert_eq!(to_decimal(12.34), Decimal::new(1234, 2));
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    }

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(Decimal::new(10005, 3)), Decimal::new(1001, 2));
        assert_eq!(round_money(Decimal::new(10004, 3)), Decimal::new(1000, 2));
    }

    #[test]
    fn test_line_amount_uses_effective_price() {
        let item = Item::new("1", "Tart").with_price(6.0).with_sale_price(4.5);
        assert_eq!(line_amount(&item, 3), Decimal::new(135, 1));
    }

    #[test]
    fn test_cart_total_empty_is_zero() {
        assert_eq!(cart_total(&[]), Decimal::ZERO);
    }
}
