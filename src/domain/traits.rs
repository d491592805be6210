// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - EnteredNameExtractor implements NameExtractor
//   - A corpus phrased "X walked into Y" would get its own
//     extractor without touching the pipeline
//   - The driver only sees NameExtractor and works with both
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::row::OutputRow;
use crate::domain::story::Story;

// ─── NameExtractor ────────────────────────────────────────────────────────────
/// Strategy for discovering character names in a story's
/// narrative steps. The pipeline is not hard-coded to one
/// corpus's phrasing — the driver supplies the strategy.
///
/// Implementations:
///   - EnteredNameExtractor → matches "<Name> entered ..."
pub trait NameExtractor {
    /// Distinct character names in first-mention order, taken
    /// from narrative steps only (question steps are skipped).
    fn extract(&self, story: &Story) -> Vec<String>;
}

// ─── RowSink ──────────────────────────────────────────────────────────────────
/// Any component that can serialize the finished table.
///
/// Implementations:
///   - CsvSink → writes a delimited file with the fixed header
pub trait RowSink {
    /// Write every row, in order, plus whatever framing the
    /// format needs (header, footer). One shot — the pipeline
    /// hands over the complete ordered table.
    fn write_all(&mut self, rows: &[OutputRow]) -> Result<()>;
}
