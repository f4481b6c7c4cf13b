pub mod diagnostics;
pub mod schema;
pub mod tidy;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ci-annotate")]
#[command(
    author,
    version,
    about = "Convert compiler and clang-tidy logs into CI annotation JSON"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a compiler build log into annotation JSON
    Diagnostics(DiagnosticsArgs),

    /// Convert a clang-tidy YAML report into annotation JSON
    Tidy(TidyArgs),

    /// Print JSON Schema for the annotation output
    Schema,
}

#[derive(Parser, Clone)]
pub struct DiagnosticsArgs {
    /// Working directory used to relativize file paths (default: process cwd)
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// Build log to convert
    #[arg(long, default_value = "build/diagnostics.txt")]
    pub log: PathBuf,

    /// Output file for the annotation JSON
    #[arg(long, default_value = "diagnostics.json")]
    pub out: PathBuf,
}

#[derive(Parser, Clone)]
pub struct TidyArgs {
    /// Working directory used to relativize file paths (default: process cwd)
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// clang-tidy YAML report to convert
    #[arg(long, default_value = "build/tidy.yaml")]
    pub report: PathBuf,

    /// Output file for the annotation JSON
    #[arg(long, default_value = "tidy-annotations.json")]
    pub out: PathBuf,
}
