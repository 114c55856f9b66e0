//! Relative Strength Index — built-in reference formula.
//!
//! Gains and losses are simple windowed means of the first differences,
//! not Wilder's recursive smoothing. Library-backed values diverge from
//! these for any period past the first window; the record's `source` tag
//! tells the two apart.

/// RSI over simple windowed gain/loss averages.
///
/// Emits `len - period` values, or an empty vector when the series has
/// fewer than `period + 1` points. A window with zero mean loss yields
/// exactly 100.0.
pub fn rsi(prices: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "RSI period must be >= 1");

    if prices.len() < period + 1 {
        return Vec::new();
    }

    let deltas: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let gains: Vec<f64> = deltas
        .iter()
        .map(|&d| if d > 0.0 { d } else { 0.0 })
        .collect();
    let losses: Vec<f64> = deltas
        .iter()
        .map(|&d| if d < 0.0 { -d } else { 0.0 })
        .collect();

    gains
        .windows(period)
        .zip(losses.windows(period))
        .map(|(gain_window, loss_window)| {
            let avg_gain = gain_window.iter().sum::<f64>() / period as f64;
            let avg_loss = loss_window.iter().sum::<f64>() / period as f64;
            if avg_loss == 0.0 {
                100.0
            } else {
                let rs = avg_gain / avg_loss;
                100.0 - 100.0 / (1.0 + rs)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
        assert!(
            (actual - expected).abs() < epsilon,
            "actual={actual}, expected={expected}"
        );
    }

    #[test]
    fn monotonic_rise_pins_rsi_at_100() {
        let prices = [100.0, 101.0, 102.0, 103.0, 104.0, 105.0];
        for value in rsi(&prices, 3) {
            assert_eq!(value, 100.0);
        }
    }

    #[test]
    fn monotonic_fall_pins_rsi_at_0() {
        let prices = [105.0, 104.0, 103.0, 102.0, 101.0, 100.0];
        for value in rsi(&prices, 3) {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn hand_checked_mixed_window() {
        // Closes: 44, 44.34, 44.09, 43.61, 44.33
        // Deltas: +0.34, -0.25, -0.48, +0.72
        // Window 1: avg_gain = 0.34/3, avg_loss = 0.73/3
        //           RSI = 100 - 100/(1 + 0.34/0.73) = 31.7757...
        // Window 2: avg_gain = 0.72/3, avg_loss = 0.73/3
        //           RSI = 100 - 100/(1 + 0.72/0.73) = 49.6551...
        let prices = [44.0, 44.34, 44.09, 43.61, 44.33];
        let result = rsi(&prices, 3);
        assert_eq!(result.len(), 2);
        assert_approx(result[0], 31.775700934579445, 1e-9);
        assert_approx(result[1], 49.655172413793096, 1e-9);
    }

    #[test]
    fn output_length_law() {
        let prices: Vec<f64> = (1..=50).map(f64::from).collect();
        assert_eq!(rsi(&prices, 14).len(), 36);
        assert_eq!(rsi(&prices, 5).len(), 45);
    }

    #[test]
    fn short_series_yields_empty() {
        let prices = [1.0, 2.0, 3.0];
        assert!(rsi(&prices, 3).is_empty());
        assert!(rsi(&prices, 14).is_empty());
    }

    #[test]
    fn values_stay_inside_bounds() {
        let prices = [100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0, 120.0];
        for value in rsi(&prices, 3) {
            assert!((0.0..=100.0).contains(&value), "RSI out of bounds: {value}");
        }
    }

    #[test]
    #[should_panic(expected = "RSI period must be >= 1")]
    fn zero_period_is_rejected() {
        rsi(&[1.0, 2.0], 0);
    }
}
