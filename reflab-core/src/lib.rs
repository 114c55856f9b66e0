//! Reflab Core — deterministic synthetic price series and reference
//! indicator values.
//!
//! This crate is the numeric heart of the fixture generator:
//! - Fixed-precision price rounding (8 decimal digits, half-up)
//! - Four deterministic series generators (random walk, sine wave,
//!   flash crash, parabolic)
//! - The reference indicator engine (SMA, RSI) with a built-in backend and
//!   an optional `ta`-crate backend behind the `ta` feature
//! - Summary statistics for the emitted records
//!
//! Everything here is pure computation over in-memory slices; catalog
//! assembly and file I/O live in `reflab-runner`.

pub mod generators;
pub mod indicators;
pub mod precision;
pub mod stats;
