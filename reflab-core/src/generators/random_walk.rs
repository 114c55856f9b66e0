//! Random-walk price generator.
//!
//! Each step multiplies the previous price by `1 + N(trend, volatility)`.
//! Normal draws come from the Box-Muller transform over a `ChaCha8Rng`
//! seeded for this call alone, so a given (start, length, volatility,
//! trend, seed) tuple always reproduces the same bytes.

use crate::precision::round_price;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate `num_points` prices starting at `start_price`.
///
/// `trend` biases the per-step drift (positive = uptrend); `volatility` is
/// the standard deviation of the per-step percentage change.
pub fn generate_random_walk(
    start_price: f64,
    num_points: usize,
    volatility: f64,
    trend: f64,
    seed: u64,
) -> Vec<f64> {
    assert!(num_points >= 1, "series length must be >= 1");
    assert!(volatility >= 0.0, "volatility must be non-negative");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut prices = Vec::with_capacity(num_points);
    let mut prev = round_price(start_price);
    prices.push(prev);

    for _ in 1..num_points {
        let change = normal_draw(&mut rng, trend, volatility);
        prev = round_price(prev * (1.0 + change));
        prices.push(prev);
    }

    prices
}

/// Sample N(mean, std_dev) via the Box-Muller transform.
fn normal_draw(rng: &mut ChaCha8Rng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}
