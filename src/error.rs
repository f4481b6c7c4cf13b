use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiagnosticsError {
    #[error("Failed to read build log '{path}': {source}")]
    ReadLog {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum TidyError {
    #[error("Failed to read tidy report '{path}': {source}")]
    ReadReport {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse tidy report: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to read source file '{path}' for offset resolution: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write annotations to '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
