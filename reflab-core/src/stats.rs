//! Summary statistics over a price series.

use crate::precision::round_price;
use serde::{Deserialize, Serialize};

/// Min/max/mean/std of a series, each rounded to price precision.
///
/// Standard deviation is the population form (divide by N), matching the
/// external references these fixtures are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

impl PriceStats {
    /// Compute stats over a non-empty series.
    pub fn compute(prices: &[f64]) -> Self {
        assert!(!prices.is_empty(), "price series must be non-empty");

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &price in prices {
            min = min.min(price);
            max = max.max(price);
        }

        let n = prices.len() as f64;
        let mean = prices.iter().sum::<f64>() / n;
        let variance = prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n;

        Self {
            min: round_price(min),
            max: round_price(max),
            mean: round_price(mean),
            std: round_price(variance.sqrt()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_checked_values() {
        let stats = PriceStats::compute(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 50.0);
        assert_eq!(stats.mean, 30.0);
        // Population std: sqrt(mean of squared deviations) = sqrt(200)
        assert_eq!(stats.std, round_price(200.0_f64.sqrt()));
    }

    #[test]
    fn single_point_has_zero_spread() {
        let stats = PriceStats::compute(&[42.0]);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn all_fields_carry_price_precision() {
        let stats = PriceStats::compute(&[1.000000014, 1.000000016, 1.000000018]);
        for value in [stats.min, stats.max, stats.mean, stats.std] {
            assert_eq!(value, round_price(value));
        }
    }

    #[test]
    #[should_panic(expected = "price series must be non-empty")]
    fn empty_series_is_rejected() {
        PriceStats::compute(&[]);
    }
}
