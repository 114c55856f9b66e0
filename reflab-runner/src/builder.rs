//! Reference dataset builder.
//!
//! Walks the catalog in order: realize each case's series, compute summary
//! stats, run the indicator engine at the fixed periods (SMA 5/10/20,
//! RSI 5/14), and assemble one record per case. Cases too short for a
//! period simply carry an empty series for it; that is expected output,
//! not an error.

use crate::catalog::CaseSpec;
use crate::progress::BuildProgress;
use crate::record::{IndicatorResults, ReferenceRecord, ReferenceSet};
use reflab_core::indicators::IndicatorBackend;
use reflab_core::stats::PriceStats;

/// Compute the five reference series for one price list.
fn compute_indicators(backend: &dyn IndicatorBackend, prices: &[f64]) -> IndicatorResults {
    IndicatorResults {
        sma_5: backend.sma(prices, 5),
        sma_10: backend.sma(prices, 10),
        sma_20: backend.sma(prices, 20),
        rsi_5: backend.rsi(prices, 5),
        rsi_14: backend.rsi(prices, 14),
        source: backend.source().to_string(),
    }
}

/// Build the full reference set, reporting per-case progress.
pub fn build_reference_set(
    catalog: &[CaseSpec],
    backend: &dyn IndicatorBackend,
    progress: &dyn BuildProgress,
) -> ReferenceSet {
    let total = catalog.len();
    let mut set = ReferenceSet::new();

    for (index, case) in catalog.iter().enumerate() {
        progress.on_case_start(case.name, case.description, index, total);

        let prices = case.series.realize();
        let record = ReferenceRecord {
            description: case.description.to_string(),
            size: prices.len(),
            price_stats: PriceStats::compute(&prices),
            indicators: compute_indicators(backend, &prices),
            prices,
        };

        progress.on_case_complete(case.name, &record);
        set.insert(case.name, record);
    }

    progress.on_finish(set.len(), set.total_points());
    set
}
