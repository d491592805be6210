// ============================================================
// Layer 6 — Run Manifest
// ============================================================
// Writes a JSON snapshot of the effective run configuration next
// to the output CSV.
//
// Why save the config separately?
//   With substitution mode on, the output depends on the seed
//   and on partition order. The manifest records both, so any
//   CSV can be regenerated byte-for-byte from the same corpus —
//   and a mystery file on disk can be traced back to the run
//   that produced it.
//
// File naming: "<output stem>.manifest.json" in the same
// directory as the CSV, e.g.
//   tomi_dataset.csv → tomi_dataset.manifest.json
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::{Path, PathBuf}};

use crate::application::convert_use_case::ConvertConfig;

/// Everything needed to reproduce one run.
#[derive(Debug, Serialize)]
struct RunManifest<'a> {
    config: &'a ConvertConfig,
    rows_written: usize,
}

/// Write the manifest and return its path.
pub fn write_manifest(config: &ConvertConfig, rows_written: usize) -> Result<PathBuf> {
    let path = manifest_path(Path::new(&config.output_path));

    let manifest = RunManifest {
        config,
        rows_written,
    };
    let json = serde_json::to_string_pretty(&manifest)?;

    fs::write(&path, json)
        .with_context(|| format!("Cannot write run manifest '{}'", path.display()))?;

    tracing::debug!("Saved run manifest: '{}'", path.display());
    Ok(path)
}

fn manifest_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    output.with_file_name(format!("{stem}.manifest.json"))
}
