use crate::annotation::Annotation;
use crate::error::OutputError;
use std::fs;
use std::path::Path;

/// Serialize annotations as a pretty-printed JSON array and write them to
/// `path`, replacing any previous content. An empty slice still produces a
/// valid `[]` document.
pub fn write_annotations(path: &Path, annotations: &[Annotation]) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(annotations)?;
    fs::write(path, json).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
