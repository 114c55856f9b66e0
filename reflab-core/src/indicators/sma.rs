//! Simple Moving Average — built-in reference formula.
//!
//! Naive windowed mean, recomputed per window. A rolling sum would be
//! faster but accumulates float error across updates; at fixture sizes
//! (≤ 5000 points) the quadratic cost is irrelevant and each output is the
//! plain `sum / period` of its own window.

/// Windowed arithmetic mean over `prices`.
///
/// Emits one value per full window (`len - period + 1` of them), or an
/// empty vector when the series is shorter than `period`.
pub fn sma(prices: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "SMA period must be >= 1");

    if prices.len() < period {
        return Vec::new();
    }

    prices
        .windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect()
}
