//! Reflab CLI — generate the indicator reference fixture.
//!
//! Produces the deterministic synthetic price catalog, computes reference
//! SMA and RSI values against it, and writes everything as one JSON file
//! for the engine's indicator tests to check against.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use reflab_core::indicators::{library_available, select_backend, BackendChoice};
use reflab_core::precision::PRICE_PRECISION;
use reflab_runner::{
    build_reference_set, reference_catalog, write_fixture, BuildProgress, ReferenceSet,
    SilentProgress, StdoutProgress,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "reflab",
    about = "Generate reference indicator values for numeric validation"
)]
struct Cli {
    /// Output path for the fixture JSON.
    #[arg(long, default_value = "tests/fixtures/indicator_reference.json")]
    output: PathBuf,

    /// Indicator backend. `auto` uses the library backend when compiled in.
    #[arg(long, value_enum, default_value = "auto")]
    backend: BackendArg,

    /// Suppress per-case progress output and the run summary.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Auto,
    Builtin,
    Library,
}

impl From<BackendArg> for BackendChoice {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Auto => BackendChoice::Auto,
            BackendArg::Builtin => BackendChoice::Builtin,
            BackendArg::Library => BackendChoice::Library,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve the backend before anything is generated: a missing library
    // backend must abort with nothing written.
    let backend = select_backend(cli.backend.into())?;
    if matches!(cli.backend, BackendArg::Auto) && !library_available() {
        eprintln!("warning: library backend not compiled in; using builtin implementation");
    }

    if !cli.quiet {
        println!("Precision: {PRICE_PRECISION} decimal digits");
        println!("Indicator source: {}", backend.source());
        println!();
    }

    let catalog = reference_catalog();
    let progress: &dyn BuildProgress = if cli.quiet {
        &SilentProgress
    } else {
        &StdoutProgress
    };
    let set = build_reference_set(&catalog, backend.as_ref(), progress);

    write_fixture(&cli.output, &set)?;

    let file_size = std::fs::metadata(&cli.output)
        .with_context(|| format!("Failed to stat {}", cli.output.display()))?
        .len();

    if cli.quiet {
        println!("Saved: {}", cli.output.display());
    } else {
        print_summary(&set, &cli.output, file_size);
    }

    Ok(())
}

fn print_summary(set: &ReferenceSet, output: &Path, file_size: u64) {
    let small = set.iter().filter(|(_, r)| r.size < 100).count();
    let medium = set.iter().filter(|(_, r)| (100..1000).contains(&r.size)).count();
    let large = set.iter().filter(|(_, r)| r.size >= 1000).count();

    println!("=== Reference Fixture ===");
    println!("Cases:            {}", set.len());
    println!("Data points:      {}", set.total_points());
    println!("Small (<100):     {small}");
    println!("Medium (100-999): {medium}");
    println!("Large (>=1000):   {large}");
    println!();
    println!(
        "Saved: {} ({:.2} KB)",
        output.display(),
        file_size as f64 / 1024.0
    );

    // Hand-check sample — the same numbers the fixture consumers' first
    // test recomputes by hand.
    if let Some(manual) = set.get("manual_verification") {
        println!();
        println!("--- Hand check: manual_verification ---");
        println!("Prices:  {:?}", manual.prices);
        println!("SMA(3) by hand: [20.0, 30.0, 40.0]");
        println!("SMA(5) computed: {:?}", manual.indicators.sma_5);
    }
}
