//! Console progress reporting for catalog builds.

use crate::record::ReferenceRecord;

/// Progress callback for multi-case builds.
pub trait BuildProgress {
    /// Called before a case's series is realized.
    fn on_case_start(&self, name: &str, description: &str, index: usize, total: usize);

    /// Called once a case's record is assembled.
    fn on_case_complete(&self, name: &str, record: &ReferenceRecord);

    /// Called after the last case.
    fn on_finish(&self, case_count: usize, total_points: usize);
}

/// Prints per-case lines to stdout.
pub struct StdoutProgress;

impl BuildProgress for StdoutProgress {
    fn on_case_start(&self, _name: &str, description: &str, index: usize, total: usize) {
        println!("[{}/{}] {description}", index + 1, total);
    }

    fn on_case_complete(&self, _name: &str, record: &ReferenceRecord) {
        println!(
            "      {} points | price range: {:.8} - {:.8}",
            record.size, record.price_stats.min, record.price_stats.max
        );
    }

    fn on_finish(&self, case_count: usize, total_points: usize) {
        println!();
        println!("Computed {case_count} cases ({total_points} data points).");
    }
}

/// Swallows all progress events; used by tests and `--quiet`.
pub struct SilentProgress;

impl BuildProgress for SilentProgress {
    fn on_case_start(&self, _name: &str, _description: &str, _index: usize, _total: usize) {}

    fn on_case_complete(&self, _name: &str, _record: &ReferenceRecord) {}

    fn on_finish(&self, _case_count: usize, _total_points: usize) {}
}
