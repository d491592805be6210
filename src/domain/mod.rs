// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits defining the concepts the
// rest of the system moves around.
//
// Rules for this layer:
//   - NO file I/O or regex machinery here
//   - NO CLI or logging here
//   - Only plain data types and trait seams
//
// Keeping this layer pure makes every pipeline stage testable
// with literal values and no fixtures.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Step, Story and the six-variant StoryGroup
pub mod story;

// Question categories and per-story components
pub mod question;

// The fixed-schema output record
pub mod row;

// Abstractions other layers implement
pub mod traits;
