// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (converting a corpus into a dataset).
//
// Rules for this layer:
//   - No parsing or text-rewriting logic here
//   - No UI or printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The corpus-to-CSV conversion workflow
pub mod convert_use_case;
