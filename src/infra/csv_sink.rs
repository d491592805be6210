// ============================================================
// Layer 6 — CSV Sink
// ============================================================
// Serializes the finished table to a comma-delimited file.
//
// Output shape:
//   - one header line, the 13 fixed columns in schema order
//   - one line per OutputRow, fields in the same order
//
// Unlike a purely numeric metrics log, these fields carry free
// text: the Story column embeds newlines, and questions can
// contain commas. Fields are therefore quoted per RFC 4180 —
// wrap in double quotes when the value contains a comma, quote,
// CR or LF, and double any embedded quotes.
//
// Column order is fixed and stable across runs; consumers index
// by header name or by position, both must keep working.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)
//            RFC 4180 (CSV format)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::domain::row::{OutputRow, COLUMNS};
use crate::domain::traits::RowSink;

/// Writes OutputRows to one CSV file, header first.
pub struct CsvSink {
    /// Full path of the CSV file to create
    path: PathBuf,
}

impl CsvSink {
    /// Point the sink at an output path. Parent directories are
    /// created here so write_all can assume they exist.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create output directory '{}'", parent.display())
                })?;
            }
        }
        Ok(Self { path })
    }
}

impl RowSink for CsvSink {
    fn write_all(&mut self, rows: &[OutputRow]) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Cannot create output file '{}'", self.path.display()))?;
        let mut out = BufWriter::new(file);

        // Header — the fixed schema, no column needs quoting
        writeln!(out, "{}", COLUMNS.join(","))?;

        for row in rows {
            let line: Vec<String> = row.fields().iter().map(|f| quote_field(f)).collect();
            writeln!(out, "{}", line.join(","))?;
        }

        out.flush()?;
        tracing::info!("Wrote {} rows to '{}'", rows.len(), self.path.display());
        Ok(())
    }
}

/// RFC 4180 quoting: quote when the field contains a delimiter,
/// a quote, or a line break; embedded quotes are doubled.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
