// ============================================================
// Layer 3 — Story Domain Types
// ============================================================
// The three shapes a ToMi corpus passes through while parsing:
//
//   Step       — one numbered line of a story
//   Story      — one narrative plus its terminal question line
//   StoryGroup — the six question-variants sharing one narrative
//
// A raw corpus line looks like:
//   "3 Sam entered the kitchen."
// and a question line looks like:
//   "5 Where is the ball?\tkitchen"
//
// The tab + question mark combination is what distinguishes a
// question step from a narrative step — both must be present in
// the same content field.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// Number of question-variant stories that share one narrative
/// skeleton in the ToMi corpus: reality, memory, two first-order
/// belief probes and two second-order belief probes.
pub const GROUP_SIZE: usize = 6;

/// One numbered line of a story. Immutable once produced by the
/// tokenizer; every downstream stage only reads it (the entity
/// substituter produces fresh Steps rather than mutating).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based line number within the story. A value of 1 marks
    /// the start of a new story.
    pub step_number: u32,

    /// The line text after the number, including (for question
    /// steps) the tab-separated answer.
    pub content: String,
}

impl Step {
    pub fn new(step_number: u32, content: impl Into<String>) -> Self {
        Self {
            step_number,
            content: content.into(),
        }
    }

    /// A step is a question step iff its content carries both the
    /// tab separator and a question mark. Checked on the raw
    /// content, before any splitting.
    pub fn is_question(&self) -> bool {
        self.content.contains('\t') && self.content.contains('?')
    }
}

/// One story: an ordered run of steps starting at step_number 1
/// and ending at the step that carries the question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub steps: Vec<Step>,
}

impl Story {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

/// Exactly GROUP_SIZE stories sharing one narrative skeleton.
///
/// Only the grouper constructs these, and only from a full buffer
/// of six — a trailing buffer with fewer stories is discarded at
/// end of input, never wrapped into a StoryGroup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryGroup {
    stories: Vec<Story>,
}

impl StoryGroup {
    /// Wrap six stories into a group. Returns None when handed
    /// anything other than exactly GROUP_SIZE stories, so an
    /// incomplete group can never be emitted downstream.
    pub fn from_stories(stories: Vec<Story>) -> Option<Self> {
        if stories.len() == GROUP_SIZE {
            Some(Self { stories })
        } else {
            None
        }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// The first variant. Its narrative skeleton is shared by all
    /// six, so character discovery and the Story column both read
    /// from here.
    pub fn first(&self) -> &Story {
        &self.stories[0]
    }

    /// Rewrite every step's content through `f`, preserving the
    /// story count, step order and step numbers. This is the only
    /// way to alter a group's text, so the exactly-six invariant
    /// survives any rewrite.
    pub fn map_contents(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            stories: self
                .stories
                .into_iter()
                .map(|story| {
                    Story::new(
                        story
                            .steps
                            .into_iter()
                            .map(|step| Step::new(step.step_number, f(&step.content)))
                            .collect(),
                    )
                })
                .collect(),
        }
    }
}
