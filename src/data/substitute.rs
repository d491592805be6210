// ============================================================
// Layer 4 — Entity Substituter
// ============================================================
// Optional rewrite stage: the second-mentioned character of a
// story group is replaced, everywhere in the group, by one
// randomly drawn inanimate-object label.
//
// Two rules keep the output consistent:
//
//   1. One plan per group. All six variants share a narrative
//      skeleton, so the same (target, replacement) pair is
//      applied to every step of every variant — the six outputs
//      stay textually aligned.
//
//   2. Whole words only. The match is wrapped in \b word
//      boundaries so a name that happens to be a prefix of
//      another word is never clipped: replacing "Sam" must leave
//      "Samantha" untouched.
//
// This stage rewrites text and nothing else — step numbers and
// the tab separator in question steps pass through untouched.
//
// Reference: regex crate documentation (escape, NoExpand)

use rand::Rng;
use regex::{NoExpand, Regex};

use crate::domain::story::StoryGroup;
use crate::domain::traits::NameExtractor;

use super::objects::random_object_label;

/// One group's substitution decision: which name to replace and
/// what to replace it with.
#[derive(Debug, Clone)]
pub struct SubstitutionPlan {
    pub target_name: String,
    pub replacement_label: String,
    matcher: Regex,
}

impl SubstitutionPlan {
    pub fn new(target_name: impl Into<String>, replacement_label: impl Into<String>) -> Self {
        let target_name = target_name.into();
        // regex::escape makes the pattern valid for any name
        let matcher = Regex::new(&format!(r"\b{}\b", regex::escape(&target_name))).unwrap();
        Self {
            target_name,
            replacement_label: replacement_label.into(),
            matcher,
        }
    }

    /// Replace every whole-word occurrence of the target in one
    /// content string.
    fn rewrite(&self, content: &str) -> String {
        self.matcher
            .replace_all(content, NoExpand(&self.replacement_label))
            .into_owned()
    }
}

/// Decide the substitution for one group: participant "B" (second
/// mention) becomes a random object label.
///
/// Returns None when the extractor finds fewer than two distinct
/// names — the policy is to skip substitution rather than
/// fabricate a character, and the group keeps its original names.
pub fn plan_for_group(
    group: &StoryGroup,
    extractor: &dyn NameExtractor,
    rng: &mut impl Rng,
) -> Option<SubstitutionPlan> {
    // The first variant carries the shared narrative skeleton
    let participants = extractor.extract(group.first());
    if participants.len() < 2 {
        tracing::debug!(
            "Found {} participant(s), skipping substitution for this group",
            participants.len()
        );
        return None;
    }

    Some(SubstitutionPlan::new(
        participants[1].clone(),
        random_object_label(rng),
    ))
}

/// Apply one plan to all six variants of a group.
pub fn apply_plan(plan: &SubstitutionPlan, group: StoryGroup) -> StoryGroup {
    group.map_contents(|content| plan.rewrite(content))
}
