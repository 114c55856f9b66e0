//! Parabolic ramp generator — stresses indicators under a strong one-way trend.

use crate::precision::round_price;

/// `start * (1 + 0.0001 · i²)`, monotonically accelerating upward.
pub fn generate_parabolic(start_price: f64, num_points: usize) -> Vec<f64> {
    assert!(num_points >= 1, "series length must be >= 1");

    (0..num_points)
        .map(|i| round_price(start_price * (1.0 + 0.0001 * (i * i) as f64)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_increasing_from_the_start() {
        let prices = generate_parabolic(43521.78654321, 200);
        assert_eq!(prices.len(), 200);
        assert_eq!(prices[0], 43521.78654321);
        for pair in prices.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn steps_accelerate() {
        let prices = generate_parabolic(100.0, 50);
        let steps: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
        for pair in steps.windows(2) {
            assert!(pair[1] > pair[0], "growth must accelerate");
        }
    }

    #[test]
    fn quadratic_term_is_exact() {
        let prices = generate_parabolic(100.0, 11);
        // i = 10 → 100 * (1 + 0.0001 * 100) = 101
        assert_eq!(prices[10], 101.0);
    }
}
