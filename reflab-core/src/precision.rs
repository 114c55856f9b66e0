//! Fixed-precision price rounding.
//!
//! Every price in the system is normalized to 8 fractional digits (the
//! cryptocurrency convention) using round-half-up, not the round-to-even
//! binary floats give. Rounding goes through an exact decimal parse of the
//! value's shortest text form, so boundary cases like `0.000000005` land on
//! `0.00000001` instead of disappearing into binary representation error.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of fractional digits every price is quantized to.
pub const PRICE_PRECISION: u32 = 8;

/// Round a single price to [`PRICE_PRECISION`] digits, half-up.
///
/// Idempotent: rounding an already-rounded price returns it bit-for-bit.
/// Non-finite input is an invariant violation.
pub fn round_price(price: f64) -> f64 {
    assert!(price.is_finite(), "price must be finite, got {price}");
    let exact = Decimal::from_str(&price.to_string())
        .unwrap_or_else(|_| panic!("price {price} exceeds decimal range"));
    exact
        .round_dp_with_strategy(PRICE_PRECISION, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(price)
}

/// Round a slice element-wise, preserving order and length.
pub fn round_prices(prices: &[f64]) -> Vec<f64> {
    prices.iter().map(|&p| round_price(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_up_at_the_boundary_digit() {
        // Round-to-even would give ...678 here.
        assert_eq!(round_price(0.123456785), 0.12345679);
    }

    #[test]
    fn smallest_representable_tick_rounds_up() {
        assert_eq!(round_price(0.000000005), 0.00000001);
        assert_eq!(round_price(0.000000004), 0.0);
    }

    #[test]
    fn already_clean_values_pass_through() {
        assert_eq!(round_price(43521.78654321), 43521.78654321);
        assert_eq!(round_price(10.0), 10.0);
        assert_eq!(round_price(0.00012345), 0.00012345);
    }

    #[test]
    fn excess_digits_are_dropped() {
        assert_eq!(round_price(1.0000000049), 1.0);
        assert_eq!(round_price(1.000000015), 1.00000002);
    }

    #[test]
    fn rounding_is_idempotent() {
        for &p in &[0.123456785, 43521.78654321, 0.000000005, 99.999999995] {
            let once = round_price(p);
            assert_eq!(once.to_bits(), round_price(once).to_bits());
        }
    }

    #[test]
    fn slice_rounding_preserves_order_and_length() {
        let rounded = round_prices(&[1.000000015, 0.000000005, 2.0]);
        assert_eq!(rounded, vec![1.00000002, 0.00000001, 2.0]);
    }

    #[test]
    #[should_panic(expected = "price must be finite")]
    fn non_finite_input_panics() {
        round_price(f64::NAN);
    }
}
