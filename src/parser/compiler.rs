use crate::annotation::{Annotation, AnnotationLevel};
use crate::parser::relativize;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Grammar for a compiler diagnostic line: `path:line:col: severity: message`.
/// The path is matched lazily so colon-bearing paths (e.g. Windows drive
/// letters) do not swallow the line and column fields.
static DIAGNOSTIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?):(\d+):\d+: (warning|error): (.*)$").expect("diagnostic line grammar")
});

const UNKNOWN_MESSAGE: &str = "Unknown warning or error, check log []";

const FALLBACK_MESSAGE: &str =
    "Failed to generate annotation for this warning/error. Please check the actions build log.";

/// Outcome of matching one log line against the diagnostic grammar.
enum LineMatch {
    /// Fully parsed diagnostic.
    Parsed(Annotation),
    /// The line matched but a field could not be interpreted; a placeholder
    /// record pointing at line 1 stands in for it.
    Fallback(Annotation),
    /// Not a diagnostic line.
    Skipped,
}

/// Extract one annotation per diagnostic line from a compiler build log.
/// Lines that do not match the grammar are skipped; file paths under
/// `workdir` are made repository-relative.
pub fn parse_build_log(log: &str, workdir: &Path) -> Vec<Annotation> {
    let mut annotations = Vec::new();

    for line in log.lines() {
        match parse_line(line, workdir) {
            LineMatch::Parsed(annotation) => annotations.push(annotation),
            LineMatch::Fallback(annotation) => {
                tracing::debug!("Emitting fallback annotation for line: {}", line);
                annotations.push(annotation);
            }
            LineMatch::Skipped => {}
        }
    }

    annotations
}

fn parse_line(line: &str, workdir: &Path) -> LineMatch {
    let Some(caps) = DIAGNOSTIC_LINE.captures(line) else {
        return LineMatch::Skipped;
    };

    let file = relativize(&caps[1], workdir);
    let level = match &caps[3] {
        "warning" => AnnotationLevel::Warning,
        _ => AnnotationLevel::Failure,
    };
    let message = clean_message(&caps[4], level);

    // The grammar guarantees digits, but not that they fit in the line type.
    match caps[2].parse::<u32>() {
        Ok(line_number) => LineMatch::Parsed(Annotation {
            file,
            line: line_number,
            title: level.build_title().to_string(),
            message,
            annotation_level: level,
        }),
        Err(_) => LineMatch::Fallback(Annotation {
            file,
            line: 1,
            title: level.build_title().to_string(),
            message: FALLBACK_MESSAGE.to_string(),
            annotation_level: level,
        }),
    }
}

/// Substitute a placeholder for empty messages, and for warnings drop the
/// trailing flag suffix (`[-Wunused-variable]` and the like).
fn clean_message(raw: &str, level: AnnotationLevel) -> String {
    if raw.is_empty() {
        return UNKNOWN_MESSAGE.to_string();
    }

    match (level, raw.find('[')) {
        (AnnotationLevel::Warning, Some(idx)) => raw[..idx].to_string(),
        _ => raw.to_string(),
    }
}
