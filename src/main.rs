use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod annotation;
mod cli;
mod error;
mod output;
mod parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("ci_annotate=debug")
    } else {
        EnvFilter::new("ci_annotate=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Diagnostics(args) => cli::diagnostics::execute(args),
        Commands::Tidy(args) => cli::tidy::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
