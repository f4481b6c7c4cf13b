use crate::annotation::{Annotation, AnnotationLevel};
use crate::error::TidyError;
use crate::parser::relativize;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Wire format of a clang-tidy `--export-fixes` style YAML report.
#[derive(Debug, Deserialize)]
pub struct TidyReport {
    #[serde(rename = "Diagnostics")]
    diagnostics: Vec<TidyDiagnostic>,
}

#[derive(Debug, Deserialize)]
struct TidyDiagnostic {
    #[serde(rename = "DiagnosticName")]
    name: String,

    #[serde(rename = "DiagnosticMessage")]
    message: DiagnosticMessage,
}

#[derive(Debug, Deserialize)]
struct DiagnosticMessage {
    #[serde(rename = "FilePath")]
    file_path: String,

    #[serde(rename = "FileOffset")]
    file_offset: usize,

    #[serde(rename = "Message")]
    message: String,
}

/// Load a tidy report from disk. An empty or null document yields `None`,
/// which callers treat as "nothing to convert".
pub fn load_tidy_report(path: &Path) -> Result<Option<TidyReport>, TidyError> {
    let content = fs::read_to_string(path).map_err(|e| TidyError::ReadReport {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
    if value.is_null() {
        return Ok(None);
    }

    let report: TidyReport = serde_yaml::from_value(value)?;
    Ok(Some(report))
}

/// Convert every diagnostic in the report to an annotation. The report format
/// carries no severity distinction, so every record is a warning.
pub fn parse_tidy_report(report: &TidyReport, workdir: &Path) -> Result<Vec<Annotation>, TidyError> {
    let mut annotations = Vec::new();

    for diagnostic in &report.diagnostics {
        let file = relativize(&diagnostic.message.file_path, workdir);
        let source = source_path(&file, workdir);
        let line = resolve_line(&source, diagnostic.message.file_offset)?;

        annotations.push(Annotation {
            file,
            line,
            title: diagnostic.name.clone(),
            message: diagnostic.message.message.clone(),
            annotation_level: AnnotationLevel::Warning,
        });
    }

    Ok(annotations)
}

/// The file to read during offset resolution: relativized paths are anchored
/// at the working directory, paths that stayed absolute are used as-is.
fn source_path(file: &str, workdir: &Path) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workdir.join(path)
    }
}

/// Resolve a byte offset to a 1-based line number by counting newlines up to
/// the offset. An offset at or before the first newline yields line 1.
fn resolve_line(source: &Path, offset: usize) -> Result<u32, TidyError> {
    let bytes = fs::read(source).map_err(|e| TidyError::ReadSource {
        path: source.to_path_buf(),
        source: e,
    })?;

    let end = offset.min(bytes.len());
    let newlines = bytes[..end].iter().filter(|&&b| b == b'\n').count();
    Ok(newlines as u32 + 1)
}
