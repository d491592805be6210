// ============================================================
// Layer 4 — Character Extractor
// ============================================================
// Discovers the named participants of a story, in order of first
// mention. The ToMi narrative introduces every character with the
// same phrasing:
//
//   "Sam entered the kitchen."
//   "Anne entered the kitchen."
//
// so the default strategy matches "<Name> entered". The strategy
// lives behind the NameExtractor trait — the pipeline itself is
// not tied to this corpus's phrasing, and the driver can supply a
// different extractor for a differently worded corpus.
//
// Question steps are skipped entirely: question text mentions
// characters too ("Where will Sam look for the ball?") but those
// mentions say nothing about participation order.
//
// Reference: Rust Book §10 (Traits), regex crate documentation

use regex::Regex;

use crate::domain::story::Story;
use crate::domain::traits::NameExtractor;

/// Default name-discovery strategy: "<Name> entered ...".
pub struct EnteredNameExtractor {
    pattern: Regex,
}

impl EnteredNameExtractor {
    pub fn new() -> Self {
        Self {
            // Hard-coded pattern, compiles unconditionally
            pattern: Regex::new(r"(\w+)\s+entered\s+").unwrap(),
        }
    }
}

impl Default for EnteredNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl NameExtractor for EnteredNameExtractor {
    fn extract(&self, story: &Story) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();

        for step in &story.steps {
            if step.is_question() {
                continue;
            }
            if let Some(caps) = self.pattern.captures(&step.content) {
                let name = &caps[1];
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }

        names
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::Step;

    fn story(lines: &[&str]) -> Story {
        Story::new(
            lines
                .iter()
                .enumerate()
                .map(|(i, l)| Step::new(i as u32 + 1, *l))
                .collect(),
        )
    }

    #[test]
    fn test_names_in_first_mention_order() {
        let s = story(&[
            "Sam entered the kitchen.",
            "Anne entered the kitchen.",
            "The ball is in the basket.",
        ]);
        let names = EnteredNameExtractor::new().extract(&s);
        assert_eq!(names, vec!["Sam", "Anne"]);
    }

    #[test]
    fn test_repeat_entrances_counted_once() {
        let s = story(&[
            "Sam entered the kitchen.",
            "Sam exited the kitchen.",
            "Sam entered the garden.",
            "Anne entered the garden.",
        ]);
        let names = EnteredNameExtractor::new().extract(&s);
        assert_eq!(names, vec!["Sam", "Anne"]);
    }

    #[test]
    fn test_question_steps_are_skipped() {
        // "Sam" appears in the question but never enters —
        // the question step must not contribute a name
        let s = story(&[
            "Anne entered the kitchen.",
            "Where will Sam look for the ball?\tkitchen",
        ]);
        let names = EnteredNameExtractor::new().extract(&s);
        assert_eq!(names, vec!["Anne"]);
    }

    #[test]
    fn test_no_entrances_yields_empty_set() {
        let s = story(&["The ball is in the basket."]);
        assert!(EnteredNameExtractor::new().extract(&s).is_empty());
    }
}
