use crate::cli::DiagnosticsArgs;
use crate::error::DiagnosticsError;
use crate::output;
use crate::parser;
use std::fs;
use tracing::info;

pub fn execute(args: DiagnosticsArgs) -> anyhow::Result<()> {
    let workdir = match args.workdir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let log = fs::read_to_string(&args.log).map_err(|e| DiagnosticsError::ReadLog {
        path: args.log.clone(),
        source: e,
    })?;

    let annotations = parser::parse_build_log(&log, &workdir);
    info!(
        "Parsed {} annotations from {}",
        annotations.len(),
        args.log.display()
    );

    output::write_annotations(&args.out, &annotations)?;
    info!("Wrote {}", args.out.display());

    Ok(())
}
