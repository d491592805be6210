// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `convert` subcommand and its configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → u64, bool, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::convert_use_case::ConvertConfig;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a story corpus into the wide-format CSV dataset
    Convert(ConvertArgs),
}

/// All arguments for the `convert` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory containing the per-partition corpus files
    /// (expects <partition>.txt per named partition)
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Path of the CSV file to write
    #[arg(long, default_value = "tomi_dataset.csv")]
    pub output: String,

    /// Partitions to process, in order. Processing order fixes
    /// the RNG draw order, so it also fixes the output
    #[arg(long, value_delimiter = ',', default_value = "train,val,test")]
    pub partitions: Vec<String>,

    /// Seed for the object-label generator — same corpus, same
    /// seed, same output bytes
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Replace each group's second character with a randomly
    /// drawn inanimate-object label
    #[arg(long)]
    pub with_objects: bool,
}

/// Convert CLI ConvertArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<ConvertArgs> for ConvertConfig {
    fn from(a: ConvertArgs) -> Self {
        ConvertConfig {
            data_dir:     a.data_dir,
            output_path:  a.output,
            partitions:   a.partitions,
            seed:         a.seed,
            with_objects: a.with_objects,
        }
    }
}
