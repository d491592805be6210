// ============================================================
// Layer 4 — Line Tokenizer
// ============================================================
// Turns raw corpus text into a stream of Steps.
//
// Every meaningful line of a ToMi file has the shape:
//
//   <whitespace?> <integer> <whitespace> <rest of line>
//
// e.g.  "1 Sam entered the kitchen."
//       "5 Where is the ball?\tkitchen"
//
// Lines that don't match the pattern — blank lines, headers,
// truncated fragments — are skipped silently. That is deliberate
// lenient-parse behaviour: the corpus contains occasional noise
// and a single bad line must never abort a batch run.
//
// The tokenizer is lazy (an Iterator) and restartable: build a
// fresh one over the same text and you get the same sequence.
//
// Reference: Rust Book §13 (Iterators)

use regex::Regex;

use crate::domain::story::Step;

/// Matches "<leading whitespace><step number><whitespace><content>".
const STEP_PATTERN: &str = r"^\s*(\d+)\s+(.*)$";

/// Lazy iterator of Steps over one partition's text.
pub struct StepTokenizer<'a> {
    lines: std::str::Lines<'a>,
    pattern: Regex,
}

impl<'a> StepTokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            // Hard-coded pattern, compiles unconditionally
            pattern: Regex::new(STEP_PATTERN).unwrap(),
        }
    }
}

impl<'a> Iterator for StepTokenizer<'a> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        // Keep consuming lines until one parses as a step.
        for line in self.lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(caps) = self.pattern.captures(line) else {
                tracing::debug!("Skipping malformed line: '{}'", line);
                continue;
            };

            // A step number too large for u32 is as malformed as a
            // missing one — skip rather than fail.
            match caps[1].parse::<u32>() {
                Ok(step_number) => return Some(Step::new(step_number, &caps[2])),
                Err(_) => {
                    tracing::debug!("Skipping line with unparseable step number: '{}'", line);
                    continue;
                }
            }
        }
        None
    }
}
