// ============================================================
// Layer 2 — ConvertUseCase
// ============================================================
// Orchestrates the full conversion pipeline in order:
//
//   Step 1: Read partition files        (Layer 4 - data)
//   Step 2: Tokenize lines into Steps   (Layer 4 - data)
//   Step 3: Group into six-story units  (Layer 4 - data)
//   Step 4: Substitute objects          (Layer 4 - data, optional)
//   Step 5: Extract story components    (Layer 4 - data)
//   Step 6: Classify questions          (Layer 4 - data)
//   Step 7: Assemble rows               (Layer 4 - data)
//   Step 8: Write CSV + manifest        (Layer 6 - infra)
//
// The pipeline is single-threaded and strictly sequential; rows
// accumulate in input order across partitions. The only shared
// state is the seeded RNG handle, created once per run and passed
// down explicitly — never a process-wide singleton — so identical
// input plus an identical seed gives byte-identical output.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::data::{
    assembler::RowAssembler,
    characters::EnteredNameExtractor,
    classifier::classify,
    components::extract_components,
    grouper::group_stories,
    substitute::{apply_plan, plan_for_group},
    tokenizer::StepTokenizer,
};
use crate::domain::question::ClassifiedQuestion;
use crate::domain::row::OutputRow;
use crate::domain::story::StoryGroup;
use crate::domain::traits::{NameExtractor, RowSink};
use crate::infra::{csv_sink::CsvSink, manifest::write_manifest};

// ─── Conversion Configuration ────────────────────────────────────────────────
// The whole configuration surface of a run. Serialisable so the
// run manifest can snapshot it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub data_dir: String,
    pub output_path: String,
    pub partitions: Vec<String>,
    pub seed: u64,
    pub with_objects: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            output_path: "tomi_dataset.csv".to_string(),
            partitions: vec!["train".to_string(), "val".to_string(), "test".to_string()],
            seed: 42,
            with_objects: false,
        }
    }
}

// ─── ConvertUseCase ──────────────────────────────────────────────────────────
// Owns the config, the name-extraction strategy, and the run.
pub struct ConvertUseCase {
    config: ConvertConfig,
    extractor: Box<dyn NameExtractor>,
}

impl ConvertUseCase {
    /// Build a use case with the default "<Name> entered"
    /// extraction strategy.
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            extractor: Box::new(EnteredNameExtractor::new()),
        }
    }

    /// Swap in a different name-discovery strategy — the pipeline
    /// is not hard-coded to one corpus's phrasing.
    pub fn with_extractor(mut self, extractor: Box<dyn NameExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Execute the full pipeline end to end. Returns the number
    /// of rows written.
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        // One generator per run; draws are ordered by group
        // processing order, which follows input file order
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        let mut rows: Vec<OutputRow> = Vec::new();
        let mut readable_partitions = 0usize;

        for partition in &cfg.partitions {
            let path = Path::new(&cfg.data_dir).join(format!("{partition}.txt"));

            // A missing partition is skipped, not fatal — corpora
            // often ship without one of train/val/test
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Skipping partition '{}': {}", path.display(), e);
                    continue;
                }
            };
            readable_partitions += 1;

            tracing::info!("Processing {partition} partition");
            let groups = group_stories(StepTokenizer::new(&text));
            tracing::info!("Found {} complete story groups in {partition}", groups.len());

            for group in groups {
                rows.push(self.build_row(group, &mut rng));
            }
        }

        // An all-missing input set must fail loudly — an empty CSV
        // that looks like a successful run is worse than an error
        if readable_partitions == 0 {
            bail!(
                "No readable partition files under '{}' (tried: {})",
                cfg.data_dir,
                cfg.partitions.join(", ")
            );
        }

        let mut sink = CsvSink::create(&cfg.output_path)?;
        sink.write_all(&rows)?;
        write_manifest(cfg, rows.len())?;

        Ok(rows.len())
    }

    /// Convert one complete group into one output row.
    fn build_row(&self, group: StoryGroup, rng: &mut StdRng) -> OutputRow {
        // Optional rewrite of the second character into an object
        // label. One plan per group, applied to all six variants;
        // fewer than two participants means no substitution.
        let group = if self.config.with_objects {
            match plan_for_group(&group, self.extractor.as_ref(), rng) {
                Some(plan) => {
                    tracing::debug!(
                        "Substituting '{}' with '{}'",
                        plan.target_name,
                        plan.replacement_label
                    );
                    apply_plan(&plan, group)
                }
                None => group,
            }
        } else {
            group
        };

        let mut assembler = RowAssembler::new();
        for story in group.stories() {
            let components = extract_components(story);
            assembler.set_story(&components.numbered_body);
            assembler.fold(ClassifiedQuestion {
                kind: classify(&components.question),
                question: components.question,
                answer: components.answer,
            });
        }
        assembler.finish()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// One complete six-variant group in raw corpus format, with
    /// the standard probe questions.
    fn fixture_group() -> String {
        let narrative = "1 Sam entered the kitchen.\n\
                         2 Anne entered the kitchen.\n\
                         3 The ball is in the basket.\n\
                         4 Anne moved the ball to the box.\n";
        let questions = [
            "5 Where is the ball really?\tbox",
            "5 Where was the ball at the beginning?\tbasket",
            "5 Where will Sam look for the ball?\tbasket",
            "5 Where will Anne look for the ball?\tbox",
            "5 Where does Sam think that Anne searches for the ball?\tbasket",
            "5 Where does Anne think that Sam searches for the ball?\tbasket",
        ];
        questions
            .iter()
            .map(|q| format!("{narrative}{q}\n"))
            .collect()
    }

    fn temp_workspace(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tomi-convert-{tag}-{}", std::process::id()));
        fs::create_dir_all(dir.join("data")).unwrap();
        dir
    }

    fn config_for(dir: &Path, output: &str, with_objects: bool) -> ConvertConfig {
        ConvertConfig {
            data_dir: dir.join("data").to_string_lossy().into_owned(),
            output_path: dir.join(output).to_string_lossy().into_owned(),
            with_objects,
            ..ConvertConfig::default()
        }
    }

    #[test]
    fn test_one_row_per_complete_group() {
        let dir = temp_workspace("rows");
        // train has two complete groups, test has one;
        // val is deliberately absent
        fs::write(
            dir.join("data/train.txt"),
            format!("{}{}", fixture_group(), fixture_group()),
        )
        .unwrap();
        fs::write(dir.join("data/test.txt"), fixture_group()).unwrap();

        let rows = ConvertUseCase::new(config_for(&dir, "out.csv", false))
            .execute()
            .unwrap();
        assert_eq!(rows, 3);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_row_columns_are_populated_from_the_variants() {
        let dir = temp_workspace("columns");
        fs::write(dir.join("data/train.txt"), fixture_group()).unwrap();

        let cfg = config_for(&dir, "out.csv", false);
        ConvertUseCase::new(cfg.clone()).execute().unwrap();

        let csv = fs::read_to_string(&cfg.output_path).unwrap();
        // Sam's first-order probe appears before Anne's in variant
        // order, so Sam takes the A columns and Anne takes B
        assert!(csv.contains("Where will Sam look for the ball?,basket,Where will Anne look for the ball?,box"));
        assert!(csv.contains("Where is the ball really?,box"));
        assert!(csv.contains("Where was the ball at the beginning?,basket"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_substitution_rewrites_story_and_questions_consistently() {
        let dir = temp_workspace("objects");
        fs::write(dir.join("data/train.txt"), fixture_group()).unwrap();

        let cfg = config_for(&dir, "out.csv", true);
        ConvertUseCase::new(cfg.clone()).execute().unwrap();

        let csv = fs::read_to_string(&cfg.output_path).unwrap();
        // Anne is the second-mentioned participant — gone everywhere
        assert!(!csv.contains("Anne"));
        // Sam survives untouched
        assert!(csv.contains("Where will Sam look for the ball?"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_same_seed_gives_byte_identical_output() {
        let dir = temp_workspace("seed");
        fs::write(
            dir.join("data/train.txt"),
            format!("{}{}", fixture_group(), fixture_group()),
        )
        .unwrap();

        let cfg_a = config_for(&dir, "a.csv", true);
        let cfg_b = config_for(&dir, "b.csv", true);
        ConvertUseCase::new(cfg_a.clone()).execute().unwrap();
        ConvertUseCase::new(cfg_b.clone()).execute().unwrap();

        let a = fs::read_to_string(&cfg_a.output_path).unwrap();
        let b = fs::read_to_string(&cfg_b.output_path).unwrap();
        assert_eq!(a, b);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_custom_name_extractor_drives_substitution() {
        use crate::domain::story::Story;

        // A corpus phrased "X walked into Y" — the default
        // "entered" strategy finds nobody, a custom one does
        struct WalkedIntoExtractor;
        impl NameExtractor for WalkedIntoExtractor {
            fn extract(&self, story: &Story) -> Vec<String> {
                let mut names = Vec::new();
                for step in &story.steps {
                    if step.is_question() {
                        continue;
                    }
                    if let Some(name) = step.content.split(" walked into").next() {
                        if name != step.content && !names.iter().any(|n| n == name) {
                            names.push(name.to_string());
                        }
                    }
                }
                names
            }
        }

        let dir = temp_workspace("strategy");
        let narrative = "1 Sam walked into the kitchen.\n2 Anne walked into the kitchen.\n";
        let corpus: String = (0..6)
            .map(|_| format!("{narrative}3 Where is the ball really?\tkitchen\n"))
            .collect();
        fs::write(dir.join("data/train.txt"), corpus).unwrap();

        let cfg = config_for(&dir, "out.csv", true);
        ConvertUseCase::new(cfg.clone())
            .with_extractor(Box::new(WalkedIntoExtractor))
            .execute()
            .unwrap();

        let csv = fs::read_to_string(&cfg.output_path).unwrap();
        assert!(!csv.contains("Anne"));
        assert!(csv.contains("Sam walked into the kitchen."));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_all_partitions_missing_is_fatal() {
        let dir = temp_workspace("fatal");
        // data/ exists but holds no partition files
        let result = ConvertUseCase::new(config_for(&dir, "out.csv", false)).execute();
        assert!(result.is_err());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_trailing_partial_group_writes_no_row() {
        let dir = temp_workspace("partial");
        // Five stories only — one short of a group
        let five: String = (0..5)
            .map(|_| "1 Sam entered the kitchen.\n2 Where is the ball?\tkitchen\n".to_string())
            .collect();
        fs::write(dir.join("data/train.txt"), five).unwrap();

        let rows = ConvertUseCase::new(config_for(&dir, "out.csv", false))
            .execute()
            .unwrap();
        assert_eq!(rows, 0);

        fs::remove_dir_all(&dir).ok();
    }
}
