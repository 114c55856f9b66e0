//! Sine-wave oscillation generator — a regularly ranging market.

use crate::precision::round_price;

/// `start * (1 + amplitude * sin(2π · frequency · i))` for i in 0..num_points.
///
/// Purely deterministic; `amplitude` is relative to the start price.
pub fn generate_sine_wave(
    start_price: f64,
    num_points: usize,
    amplitude: f64,
    frequency: f64,
) -> Vec<f64> {
    assert!(num_points >= 1, "series length must be >= 1");

    (0..num_points)
        .map(|i| {
            let phase = 2.0 * std::f64::consts::PI * frequency * i as f64;
            round_price(start_price * (1.0 + amplitude * phase.sin()))
        })
        .collect()
}
