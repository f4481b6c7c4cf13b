use crate::cli::TidyArgs;
use crate::output;
use crate::parser;
use tracing::info;

pub fn execute(args: TidyArgs) -> anyhow::Result<()> {
    let workdir = match args.workdir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    // An empty report means the analysis ran clean; no output file is written.
    let Some(report) = parser::load_tidy_report(&args.report)? else {
        info!(
            "Tidy report {} is empty, nothing to convert",
            args.report.display()
        );
        return Ok(());
    };

    let annotations = parser::parse_tidy_report(&report, &workdir)?;
    info!(
        "Parsed {} annotations from {}",
        annotations.len(),
        args.report.display()
    );

    output::write_annotations(&args.out, &annotations)?;
    info!("Wrote {}", args.out.display());

    Ok(())
}
