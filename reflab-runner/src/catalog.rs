//! The fixed test-case catalog.
//!
//! Thirteen named cases: a hand-checkable literal, seeded random walks at
//! several sizes and volatilities, sine-wave ranging markets, the extreme
//! scenarios (flash crash, parabolic ramp), boundary price magnitudes, and
//! the StockCharts RSI sample kept for cross-checking published values.
//! Catalog order is the order records appear in the fixture.

use reflab_core::generators::{
    generate_flash_crash, generate_parabolic, generate_random_walk, generate_sine_wave,
};
use reflab_core::precision::round_prices;

/// Baseline BTC-like price exercising the full 8 fractional digits.
pub const BTC_BASE: f64 = 43521.78654321;

/// How a case's price series is produced.
#[derive(Debug, Clone)]
pub enum SeriesSpec {
    /// A literal price list, copied as-is.
    Literal(Vec<f64>),
    RandomWalk {
        start: f64,
        points: usize,
        volatility: f64,
        trend: f64,
        seed: u64,
    },
    SineWave {
        start: f64,
        points: usize,
        amplitude: f64,
        frequency: f64,
    },
    FlashCrash {
        start: f64,
        points: usize,
        crash_point: f64,
        crash_magnitude: f64,
    },
    Parabolic {
        start: f64,
        points: usize,
    },
}

impl SeriesSpec {
    /// Produce the price series for this spec.
    pub fn realize(&self) -> Vec<f64> {
        match self {
            Self::Literal(prices) => round_prices(prices),
            Self::RandomWalk {
                start,
                points,
                volatility,
                trend,
                seed,
            } => generate_random_walk(*start, *points, *volatility, *trend, *seed),
            Self::SineWave {
                start,
                points,
                amplitude,
                frequency,
            } => generate_sine_wave(*start, *points, *amplitude, *frequency),
            Self::FlashCrash {
                start,
                points,
                crash_point,
                crash_magnitude,
            } => generate_flash_crash(*start, *points, *crash_point, *crash_magnitude),
            Self::Parabolic { start, points } => generate_parabolic(*start, *points),
        }
    }
}

/// A named catalog entry.
#[derive(Debug, Clone)]
pub struct CaseSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub series: SeriesSpec,
}

/// The full catalog, in fixture order.
pub fn reference_catalog() -> Vec<CaseSpec> {
    vec![
        // Small set for hand verification
        CaseSpec {
            name: "manual_verification",
            description: "Hand-verifiable data (simple arithmetic)",
            series: SeriesSpec::Literal(vec![10.0, 20.0, 30.0, 40.0, 50.0]),
        },
        // Medium sets (100 points)
        CaseSpec {
            name: "btc_uptrend_100",
            description: "BTC uptrend (100 points, 8-digit precision)",
            series: SeriesSpec::RandomWalk {
                start: BTC_BASE,
                points: 100,
                volatility: 0.015,
                trend: 0.002,
                seed: 42,
            },
        },
        CaseSpec {
            name: "btc_downtrend_100",
            description: "BTC downtrend (100 points, 8-digit precision)",
            series: SeriesSpec::RandomWalk {
                start: BTC_BASE,
                points: 100,
                volatility: 0.015,
                trend: -0.002,
                seed: 43,
            },
        },
        CaseSpec {
            name: "btc_sideways_100",
            description: "BTC sideways chop (100 points, 8-digit precision)",
            series: SeriesSpec::SineWave {
                start: BTC_BASE,
                points: 100,
                amplitude: 0.02,
                frequency: 0.05,
            },
        },
        CaseSpec {
            name: "btc_volatile_100",
            description: "BTC high volatility (100 points, 8-digit precision)",
            series: SeriesSpec::RandomWalk {
                start: BTC_BASE,
                points: 100,
                volatility: 0.05,
                trend: 0.0,
                seed: 44,
            },
        },
        // Large sets (1000 points)
        CaseSpec {
            name: "btc_trend_1000",
            description: "BTC long-term trend (1000 points, 8-digit precision)",
            series: SeriesSpec::RandomWalk {
                start: BTC_BASE,
                points: 1000,
                volatility: 0.02,
                trend: 0.001,
                seed: 45,
            },
        },
        CaseSpec {
            name: "btc_ranging_1000",
            description: "BTC long-term range (1000 points, 8-digit precision)",
            series: SeriesSpec::SineWave {
                start: BTC_BASE,
                points: 1000,
                amplitude: 0.05,
                frequency: 0.01,
            },
        },
        // Extended set (5000 points) — also the throughput check
        CaseSpec {
            name: "btc_longterm_5000",
            description: "BTC extended history (5000 points, performance test)",
            series: SeriesSpec::RandomWalk {
                start: BTC_BASE,
                points: 5000,
                volatility: 0.02,
                trend: 0.0005,
                seed: 46,
            },
        },
        // Extreme scenarios
        CaseSpec {
            name: "btc_flash_crash",
            description: "BTC flash-crash scenario (500 points)",
            series: SeriesSpec::FlashCrash {
                start: BTC_BASE,
                points: 500,
                crash_point: 0.5,
                crash_magnitude: 0.3,
            },
        },
        CaseSpec {
            name: "btc_parabolic",
            description: "BTC parabolic rise (200 points)",
            series: SeriesSpec::Parabolic {
                start: BTC_BASE,
                points: 200,
            },
        },
        // Boundary magnitudes
        CaseSpec {
            name: "tiny_prices",
            description: "Tiny prices (altcoin, 8-digit precision)",
            series: SeriesSpec::RandomWalk {
                start: 0.00012345,
                points: 50,
                volatility: 0.03,
                trend: 0.0,
                seed: 47,
            },
        },
        CaseSpec {
            name: "large_prices",
            description: "Large prices (8-digit precision)",
            series: SeriesSpec::RandomWalk {
                start: 123456.78901234,
                points: 50,
                volatility: 0.02,
                trend: 0.0,
                seed: 48,
            },
        },
        // Published worked example, kept for cross-checking
        CaseSpec {
            name: "stockcharts_rsi",
            description: "StockCharts RSI worked example",
            series: SeriesSpec::Literal(vec![
                44.0, 44.34, 44.09, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89,
                46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_cases_with_unique_names() {
        let catalog = reference_catalog();
        assert_eq!(catalog.len(), 13);

        let mut names: Vec<&str> = catalog.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13, "case names must be unique");
    }

    #[test]
    fn catalog_order_is_stable() {
        let names: Vec<&str> = reference_catalog().iter().map(|c| c.name).collect();
        assert_eq!(names[0], "manual_verification");
        assert_eq!(names[1], "btc_uptrend_100");
        assert_eq!(names[12], "stockcharts_rsi");
    }

    #[test]
    fn realized_lengths_match_the_specs() {
        for case in reference_catalog() {
            let prices = case.series.realize();
            let expected = match &case.series {
                SeriesSpec::Literal(list) => list.len(),
                SeriesSpec::RandomWalk { points, .. }
                | SeriesSpec::SineWave { points, .. }
                | SeriesSpec::FlashCrash { points, .. }
                | SeriesSpec::Parabolic { points, .. } => *points,
            };
            assert_eq!(prices.len(), expected, "length mismatch in {}", case.name);
        }
    }

    #[test]
    fn realization_is_reproducible() {
        for case in reference_catalog() {
            assert_eq!(
                case.series.realize(),
                case.series.realize(),
                "case {} is not deterministic",
                case.name
            );
        }
    }
}
