// ============================================================
// Layer 4 — Story Grouper
// ============================================================
// Accumulates Steps into Stories, and Stories into groups of
// six. The corpus writes the same narrative six times, once per
// probe question, back to back — so six consecutive stories form
// one logical unit (a StoryGroup).
//
// Boundary rule: a step numbered 1 closes the story in progress.
// There is no explicit end marker in the format.
//
// Loss policy: a trailing buffer with fewer than six stories at
// end of input is dropped, not emitted. The source corpus has
// occasional truncated tails and a partial group is useless to
// downstream consumers — the row schema needs all six probes.
//
// Reference: Rust Book §8 (Vectors), §13 (Iterators)

use crate::domain::story::{Step, Story, StoryGroup, GROUP_SIZE};

/// Consume a step stream and return every complete six-story
/// group, in input order.
pub fn group_stories(steps: impl Iterator<Item = Step>) -> Vec<StoryGroup> {
    let mut groups: Vec<StoryGroup> = Vec::new();
    let mut buffer: Vec<Story> = Vec::new();
    let mut current: Vec<Step> = Vec::new();

    for step in steps {
        // Step number 1 starts a new story; close the previous one
        if step.step_number == 1 && !current.is_empty() {
            close_story(&mut current, &mut buffer, &mut groups);
        }
        current.push(step);
    }

    // The last story has no following step 1 to close it
    if !current.is_empty() {
        close_story(&mut current, &mut buffer, &mut groups);
    }

    if !buffer.is_empty() {
        tracing::debug!(
            "Discarding trailing buffer of {} stories (need {})",
            buffer.len(),
            GROUP_SIZE
        );
    }

    groups
}

/// Move the in-progress story into the buffer; flush the buffer
/// as a group the moment it reaches six.
fn close_story(current: &mut Vec<Step>, buffer: &mut Vec<Story>, groups: &mut Vec<StoryGroup>) {
    buffer.push(Story::new(std::mem::take(current)));

    if buffer.len() == GROUP_SIZE {
        if let Some(group) = StoryGroup::from_stories(std::mem::take(buffer)) {
            groups.push(group);
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// Build the steps of `n` back-to-back two-line stories.
    fn stories(n: usize) -> Vec<Step> {
        let mut steps = Vec::new();
        for i in 0..n {
            steps.push(Step::new(1, format!("Sam entered the kitchen. ({i})")));
            steps.push(Step::new(2, "Where is the ball?\tkitchen"));
        }
        steps
    }

    #[test]
    fn test_six_stories_form_one_group() {
        let groups = group_stories(stories(6).into_iter());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].stories().len(), 6);
    }

    #[test]
    fn test_trailing_partial_group_is_discarded() {
        // Five stories then end of file → nothing emitted
        let groups = group_stories(stories(5).into_iter());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_seventh_story_does_not_poison_the_first_group() {
        // The complete group of six is kept; the lone seventh
        // story is the discarded tail
        let groups = group_stories(stories(7).into_iter());
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_twelve_stories_form_two_groups() {
        let groups = group_stories(stories(12).into_iter());
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_stories_keep_their_steps_in_order() {
        let groups = group_stories(stories(6).into_iter());
        let story = &groups[0].stories()[3];
        assert_eq!(story.steps[0].step_number, 1);
        assert_eq!(story.steps[1].step_number, 2);
        assert!(story.steps[1].is_question());
    }

    #[test]
    fn test_empty_stream_yields_no_groups() {
        let groups = group_stories(std::iter::empty());
        assert!(groups.is_empty());
    }
}
