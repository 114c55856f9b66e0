//! Reference indicator engine.
//!
//! The built-in formulas (`sma`, `rsi`) are deliberately plain: windowed
//! means recomputed per window, no incremental state. They exist to produce
//! trustworthy reference numbers, not to be fast. The `backend` module
//! wraps them — and, behind the `ta` feature, the `ta` crate — in a common
//! capability interface selected by explicit configuration.

pub mod backend;
pub mod rsi;
pub mod sma;

#[cfg(feature = "ta")]
pub use backend::LibraryBackend;
pub use backend::{
    library_available, select_backend, BackendChoice, BackendError, BuiltinBackend,
    IndicatorBackend,
};
pub use rsi::rsi;
pub use sma::sma;
