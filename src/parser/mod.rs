mod compiler;
mod tidy;

pub use compiler::parse_build_log;
pub use tidy::{load_tidy_report, parse_tidy_report};

use std::path::Path;

/// Strip the working-directory prefix from a path string, yielding a
/// repository-relative path. Paths outside the working directory pass
/// through unchanged.
pub fn relativize(path: &str, workdir: &Path) -> String {
    let prefix = format!("{}/", workdir.display());
    path.strip_prefix(&prefix).unwrap_or(path).to_string()
}
