use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lifting wavelet precision benchmark.
#[derive(Parser)]
#[command(
    name = "wavelift",
    version,
    about = "Round-trip precision benchmark for lifting-scheme wavelets"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run every configured input, wavelet and precision.
    Run(RunArgs),
    /// Write random input signals for every configured input.
    Generate(GenerateArgs),
    /// Compare the subbands of two output trees.
    Compare(CompareArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    pub config: PathBuf,

    /// Output base; each precision writes to `<OUTPUT_DIR>-<suffix>`.
    #[arg(default_value = "data/output")]
    pub output_dir: PathBuf,

    /// Directory holding one raw file per configured input.
    #[arg(default_value = "data/input")]
    pub input_dir: PathBuf,

    /// Override the configured precisions (repeatable).
    #[arg(short, long = "precision")]
    pub precisions: Vec<String>,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    pub config: PathBuf,

    /// Directory to write input signals into.
    #[arg(short, long, default_value = "data/input")]
    pub output: PathBuf,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `compare` subcommand.
#[derive(clap::Args)]
pub struct CompareArgs {
    /// Path to TOML configuration file.
    pub config: PathBuf,

    /// Output tree under test, e.g. `data/output-bf16`.
    pub candidate: PathBuf,

    /// Output tree used as reference, e.g. `data/output-f64`.
    pub reference: PathBuf,
}
