//! Indicator engine backends.
//!
//! Two interchangeable implementations of one contract: the built-in
//! formulas in this crate, and an optional adapter over the `ta` crate.
//! Callers pick one explicitly through [`BackendChoice`]; nothing probes
//! availability at call sites.

use crate::indicators;
use thiserror::Error;

/// Computes indicator series over a price slice.
///
/// Both backends honor the same length contract — `len - period + 1` SMA
/// values, `len - period` RSI values, empty when the input is too short —
/// but are free to disagree numerically: the library RSI smooths
/// exponentially where the built-in one averages plain windows.
pub trait IndicatorBackend {
    /// Tag recorded in the output so consumers know which formula ran.
    fn source(&self) -> &'static str;

    fn sma(&self, prices: &[f64], period: usize) -> Vec<f64>;

    fn rsi(&self, prices: &[f64], period: usize) -> Vec<f64>;
}

/// Backend selection, passed in from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendChoice {
    /// Library backend if compiled in, otherwise builtin.
    Auto,
    Builtin,
    Library,
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("library backend requested but this binary was built without the `ta` feature")]
    LibraryUnavailable,
}

/// True when the `ta`-crate backend was compiled into this binary.
pub fn library_available() -> bool {
    cfg!(feature = "ta")
}

/// Resolve a [`BackendChoice`] to a concrete backend.
///
/// `Library` without the compiled feature is an error, so the caller can
/// abort before any series is generated. `Auto` falls back to the builtin
/// backend instead; reporting that degradation is the caller's job.
pub fn select_backend(choice: BackendChoice) -> Result<Box<dyn IndicatorBackend>, BackendError> {
    match choice {
        BackendChoice::Builtin => Ok(Box::new(BuiltinBackend)),
        BackendChoice::Library => {
            #[cfg(feature = "ta")]
            {
                Ok(Box::new(LibraryBackend))
            }
            #[cfg(not(feature = "ta"))]
            {
                Err(BackendError::LibraryUnavailable)
            }
        }
        BackendChoice::Auto => {
            #[cfg(feature = "ta")]
            {
                Ok(Box::new(LibraryBackend))
            }
            #[cfg(not(feature = "ta"))]
            {
                Ok(Box::new(BuiltinBackend))
            }
        }
    }
}

/// The reference formulas from this crate.
pub struct BuiltinBackend;

impl IndicatorBackend for BuiltinBackend {
    fn source(&self) -> &'static str {
        "builtin"
    }

    fn sma(&self, prices: &[f64], period: usize) -> Vec<f64> {
        indicators::sma(prices, period)
    }

    fn rsi(&self, prices: &[f64], period: usize) -> Vec<f64> {
        indicators::rsi(prices, period)
    }
}

/// Adapter over the `ta` crate's streaming indicators.
///
/// `ta` emits a value for every input, warmup included; the warmup prefix
/// is dropped so output lengths match the built-in contract.
#[cfg(feature = "ta")]
pub struct LibraryBackend;

#[cfg(feature = "ta")]
impl IndicatorBackend for LibraryBackend {
    fn source(&self) -> &'static str {
        "ta"
    }

    fn sma(&self, prices: &[f64], period: usize) -> Vec<f64> {
        use ta::indicators::SimpleMovingAverage;
        use ta::Next;

        assert!(period >= 1, "SMA period must be >= 1");
        if prices.len() < period {
            return Vec::new();
        }
        let mut sma = SimpleMovingAverage::new(period).expect("Invalid SMA period");
        prices
            .iter()
            .map(|&price| sma.next(price))
            .skip(period - 1)
            .collect()
    }

    fn rsi(&self, prices: &[f64], period: usize) -> Vec<f64> {
        use ta::indicators::RelativeStrengthIndex;
        use ta::Next;

        assert!(period >= 1, "RSI period must be >= 1");
        if prices.len() < period + 1 {
            return Vec::new();
        }
        let mut rsi = RelativeStrengthIndex::new(period).expect("Invalid RSI period");
        prices
            .iter()
            .map(|&price| rsi.next(price))
            .skip(period)
            .collect()
    }
}
