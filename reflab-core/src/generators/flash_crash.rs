//! Flash-crash scenario generator.
//!
//! Three linear phases: a slow rise until `crash_index`, a sharp decline to
//! `start * (1 - crash_magnitude)` at `recovery_index`, then a gradual climb
//! back toward the starting level. The recovery never completes inside the
//! series; the last point still sits below the pre-crash trajectory.

use crate::precision::round_price;

/// `crash_point` positions the crash as a fraction of the series (0..1);
/// `crash_magnitude` is the fractional drop at the bottom.
pub fn generate_flash_crash(
    start_price: f64,
    num_points: usize,
    crash_point: f64,
    crash_magnitude: f64,
) -> Vec<f64> {
    assert!(num_points >= 1, "series length must be >= 1");

    let crash_index = (num_points as f64 * crash_point) as usize;
    let recovery_index = crash_index + (num_points as f64 * 0.1) as usize;
    // The recovery tail can shrink to nothing when the crash sits at the
    // very end of the series; clamp so the slope never divides by zero.
    let recovery_span = num_points.saturating_sub(recovery_index).max(1) as f64;

    (0..num_points)
        .map(|i| {
            let price = if i < crash_index {
                start_price * (1.0 + 0.001 * i as f64)
            } else if i < recovery_index {
                let progress = (i - crash_index) as f64 / (recovery_index - crash_index) as f64;
                start_price * (1.0 - crash_magnitude * progress)
            } else {
                let progress = (i - recovery_index) as f64 / recovery_span;
                start_price * (1.0 - crash_magnitude * (1.0 - progress))
            };
            round_price(price)
        })
        .collect()
}
