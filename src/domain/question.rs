// ============================================================
// Layer 3 — Question Domain Types
// ============================================================
// The ToMi corpus probes four things about each narrative:
//
//   Reality           — where the object really is
//   Memory            — where it was at the beginning
//   FirstOrderBelief  — where a character will look for it
//   SecondOrderBelief — where a character thinks another
//                       character searches for it
//
// Anything that matches none of the four cues is Unknown and is
// dropped from the output row.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// Semantic category of a probe question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    Reality,
    Memory,
    FirstOrderBelief,
    SecondOrderBelief,
    Unknown,
}

/// A question/answer pair with its assigned category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedQuestion {
    pub kind: QuestionKind,
    pub question: String,
    pub answer: String,
}

/// One story split into its two halves: the numbered narrative
/// body ("1. Sam entered the kitchen.\n2. ...") and the trailing
/// question/answer pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryComponents {
    pub numbered_body: String,
    pub question: String,
    pub answer: String,
}
