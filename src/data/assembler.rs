// ============================================================
// Layer 4 — Row Assembler
// ============================================================
// Folds the six classified question/answer pairs of one group
// into a single OutputRow.
//
// Assignment policy:
//   - Reality and Memory map to their single named columns;
//     a duplicate of either overwrites (last wins, no error).
//   - Belief questions are positional: the first FirstOrderBelief
//     encountered fills the "A" columns, the second fills "B",
//     a third or later is dropped. SecondOrderBelief follows the
//     identical rule. "A"/"B" carry no semantic claim beyond
//     order of appearance in the six-variant sequence.
//   - Unknown questions are dropped.
//
// The Story column takes the numbered body of the first variant
// processed; all six share the narrative skeleton so any variant
// would do. The assembler never fails: a group missing a
// category still produces a row with empty-string columns.
//
// Reference: Rust Book §6 (match)

use crate::domain::question::{ClassifiedQuestion, QuestionKind};
use crate::domain::row::OutputRow;

#[derive(Debug, Default)]
pub struct RowAssembler {
    row: OutputRow,
    first_order_seen: usize,
    second_order_seen: usize,
}

impl RowAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the shared narrative. Only the first non-empty body
    /// sticks; later variants repeat the same text.
    pub fn set_story(&mut self, numbered_body: &str) {
        if self.row.story.is_empty() {
            self.row.story = numbered_body.to_string();
        }
    }

    /// Fold one classified question into the row.
    pub fn fold(&mut self, q: ClassifiedQuestion) {
        match q.kind {
            QuestionKind::Reality => {
                self.row.reality_question = q.question;
                self.row.reality_answer = q.answer;
            }
            QuestionKind::Memory => {
                self.row.memory_question = q.question;
                self.row.memory_answer = q.answer;
            }
            QuestionKind::FirstOrderBelief => {
                match self.first_order_seen {
                    0 => {
                        self.row.first_order_a_question = q.question;
                        self.row.first_order_a_answer = q.answer;
                    }
                    1 => {
                        self.row.first_order_b_question = q.question;
                        self.row.first_order_b_answer = q.answer;
                    }
                    // Third or later of the same kind: dropped
                    _ => {}
                }
                self.first_order_seen += 1;
            }
            QuestionKind::SecondOrderBelief => {
                match self.second_order_seen {
                    0 => {
                        self.row.second_order_a_question = q.question;
                        self.row.second_order_a_answer = q.answer;
                    }
                    1 => {
                        self.row.second_order_b_question = q.question;
                        self.row.second_order_b_answer = q.answer;
                    }
                    _ => {}
                }
                self.second_order_seen += 1;
            }
            QuestionKind::Unknown => {}
        }
    }

    pub fn finish(self) -> OutputRow {
        self.row
    }
}
