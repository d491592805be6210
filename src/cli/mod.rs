// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// One command is supported:
//   `convert` — parses the corpus partitions and writes the CSV
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ConvertArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "tomi-dataset",
    version = "0.1.0",
    about = "Convert ToMi theory-of-mind story corpora into a wide-format CSV dataset."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Convert(args) => Self::run_convert(args),
        }
    }

    /// Handles the `convert` subcommand.
    /// Converts CLI args into a ConvertConfig and hands off to Layer 2.
    fn run_convert(args: ConvertArgs) -> Result<()> {
        use crate::application::convert_use_case::ConvertUseCase;

        tracing::info!("Converting corpus in: {}", args.data_dir);

        let output = args.output.clone();

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = ConvertUseCase::new(args.into());
        let rows = use_case.execute()?;

        println!("Conversion complete. {rows} rows written to {output}.");
        Ok(())
    }
}
