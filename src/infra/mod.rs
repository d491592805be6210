// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting output concerns that don't belong to any
// pipeline stage:
//
//   csv_sink.rs — Serializes the finished table to a
//                 comma-delimited file with the fixed column
//                 schema and RFC 4180 quoting.
//
//   manifest.rs — Saves the run configuration (seed included)
//                 as JSON next to the output so a seeded run
//                 can be reproduced exactly.
//
// Reference: Rust Book §7 (Modules)

/// CSV serialization of output rows
pub mod csv_sink;

/// Reproducibility manifest for each run
pub mod manifest;
