// ============================================================
// Layer 4 — Component Extractor
// ============================================================
// Splits one Story into the two pieces the row assembler needs:
//
//   numbered_body — the narrative steps rendered as
//                   "<step_number>. <content>", newline-joined,
//                   in original order
//   question      — the text before the tab on the question step
//   answer        — the first tab-separated field after it
//                   (empty when the corpus line has no answer)
//
// Questionhood is decided on the raw content — tab AND question
// mark present — before any splitting. A step that fails that
// test is narrative, even if it contains a stray tab.

use crate::domain::question::StoryComponents;
use crate::domain::story::Story;

pub fn extract_components(story: &Story) -> StoryComponents {
    let mut sentences: Vec<String> = Vec::new();
    let mut question = String::new();
    let mut answer = String::new();

    for step in &story.steps {
        if step.is_question() {
            let mut parts = step.content.split('\t');
            question = parts.next().unwrap_or_default().to_string();
            answer = parts.next().unwrap_or_default().to_string();
        } else {
            sentences.push(format!("{}. {}", step.step_number, step.content));
        }
    }

    StoryComponents {
        numbered_body: sentences.join("\n"),
        question,
        answer,
    }
}
