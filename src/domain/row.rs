// ============================================================
// Layer 3 — Output Row
// ============================================================
// One row of the final wide-format table: the shared narrative
// plus the six classified question/answer pairs of one group,
// spread across fixed named columns.
//
// The column order is part of the output contract — it must be
// identical across runs so downstream tooling can rely on it.
//
// Lifecycle: created empty per StoryGroup, populated one
// classified question at a time by the row assembler, then
// emitted. Missing categories stay as empty strings — a group
// with no memory probe still produces a row.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// Fixed CSV header, in emission order.
pub const COLUMNS: [&str; 13] = [
    "Story",
    "Reality Question",
    "Reality Answer",
    "Memory Question",
    "Memory Answer",
    "First-Order Belief A Question",
    "First-Order Belief A Answer",
    "First-Order Belief B Question",
    "First-Order Belief B Answer",
    "Second-Order Belief A Question",
    "Second-Order Belief A Answer",
    "Second-Order Belief B Question",
    "Second-Order Belief B Answer",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub story: String,
    pub reality_question: String,
    pub reality_answer: String,
    pub memory_question: String,
    pub memory_answer: String,
    pub first_order_a_question: String,
    pub first_order_a_answer: String,
    pub first_order_b_question: String,
    pub first_order_b_answer: String,
    pub second_order_a_question: String,
    pub second_order_a_answer: String,
    pub second_order_b_question: String,
    pub second_order_b_answer: String,
}

impl OutputRow {
    /// Field values in the same order as COLUMNS.
    pub fn fields(&self) -> [&str; 13] {
        [
            &self.story,
            &self.reality_question,
            &self.reality_answer,
            &self.memory_question,
            &self.memory_answer,
            &self.first_order_a_question,
            &self.first_order_a_answer,
            &self.first_order_b_question,
            &self.first_order_b_answer,
            &self.second_order_a_question,
            &self.second_order_a_answer,
            &self.second_order_b_question,
            &self.second_order_b_answer,
        ]
    }
}
