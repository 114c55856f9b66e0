//! Reflab Runner — catalog assembly and fixture output.
//!
//! Builds on `reflab-core` to provide:
//! - The fixed 13-case catalog (literal lists + generator invocations)
//! - The reference dataset builder (stats + indicator series per case)
//! - The serializable record shapes and ordered output mapping
//! - Console progress reporting and the JSON fixture writer

pub mod builder;
pub mod catalog;
pub mod progress;
pub mod record;
pub mod writer;

pub use builder::build_reference_set;
pub use catalog::{reference_catalog, CaseSpec, SeriesSpec, BTC_BASE};
pub use progress::{BuildProgress, SilentProgress, StdoutProgress};
pub use record::{IndicatorResults, ReferenceRecord, ReferenceSet};
pub use writer::write_fixture;
