// ============================================================
// Layer 4 — Question Classifier
// ============================================================
// Maps question text to its probe category with ordered,
// first-match substring rules. Order matters: a question that
// carries several cues takes the earliest-listed category, so
// "Where is the ball really, do you think that..." is Reality,
// not SecondOrderBelief.
//
// The cues, in priority order:
//
//   "at the beginning"       → Memory
//   "really"                 → Reality
//   "think that"             → SecondOrderBelief
//   "will" + "look for"      → FirstOrderBelief
//   anything else            → Unknown
//
// Pure function — no state, no I/O.

use crate::domain::question::QuestionKind;

pub fn classify(question: &str) -> QuestionKind {
    if question.contains("at the beginning") {
        QuestionKind::Memory
    } else if question.contains("really") {
        QuestionKind::Reality
    } else if question.contains("think that") {
        QuestionKind::SecondOrderBelief
    } else if question.contains("will") && question.contains("look for") {
        QuestionKind::FirstOrderBelief
    } else {
        QuestionKind::Unknown
    }
}
