use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single annotation record, shaped for the CI annotation renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Annotation {
    /// Path relative to the repository root.
    pub file: String,

    /// 1-based line number; 1 when the real line could not be determined.
    pub line: u32,

    pub title: String,

    pub message: String,

    pub annotation_level: AnnotationLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    Warning,
    Failure,
}

impl AnnotationLevel {
    /// Title used for compiler diagnostics of this level.
    pub fn build_title(&self) -> &'static str {
        match self {
            AnnotationLevel::Warning => "Build Warning",
            AnnotationLevel::Failure => "Build Error",
        }
    }
}
