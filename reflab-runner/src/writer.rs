//! Fixture artifact writer.
//!
//! The only filesystem touchpoint in the workspace: create the output
//! directory, pretty-print the set, write one file. Numeric leaves go out
//! at full float precision — prices already carry at most 8 fractional
//! digits, indicator values keep whatever the formula produced.

use crate::record::ReferenceSet;
use anyhow::{Context, Result};
use std::path::Path;

/// Serialize the set as pretty JSON at `path`, creating parent directories.
pub fn write_fixture(path: &Path, set: &ReferenceSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let json =
        serde_json::to_string_pretty(set).context("Failed to serialize the reference set")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write fixture to {}", path.display()))?;
    Ok(())
}
