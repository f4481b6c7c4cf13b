use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn ci_annotate() -> Command {
    Command::cargo_bin("ci-annotate").unwrap()
}

/// Canonicalized tempdir root, so paths in fixtures match what the binary
/// sees as its working directory.
fn setup() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    fs::create_dir(root.join("build")).unwrap();
    (dir, root)
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn diagnostics_converts_build_log() {
    let (_dir, root) = setup();
    fs::write(
        root.join("build/diagnostics.txt"),
        "\
[ 50%] Building CXX object src/a.cpp.o
src/a.cpp:42:5: warning: unused variable 'x' [-Wunused-variable]
src/a.cpp:10:1: error: expected ';'
ninja: build stopped: subcommand failed.
",
    )
    .unwrap();

    ci_annotate()
        .current_dir(&root)
        .arg("diagnostics")
        .assert()
        .success();

    let records = read_json(&root.join("diagnostics.json"));
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["file"], "src/a.cpp");
    assert_eq!(records[0]["line"], 42);
    assert_eq!(records[0]["title"], "Build Warning");
    assert_eq!(records[0]["message"], "unused variable 'x' ");
    assert_eq!(records[0]["annotation_level"], "warning");

    assert_eq!(records[1]["line"], 10);
    assert_eq!(records[1]["title"], "Build Error");
    assert_eq!(records[1]["message"], "expected ';'");
    assert_eq!(records[1]["annotation_level"], "failure");
}

#[test]
fn diagnostics_strips_workdir_prefix() {
    let (_dir, root) = setup();
    fs::write(
        root.join("build/diagnostics.txt"),
        format!("{}/src/a.cpp:3:1: error: boom\n", root.display()),
    )
    .unwrap();

    ci_annotate()
        .current_dir(&root)
        .args(["diagnostics", "--workdir"])
        .arg(&root)
        .assert()
        .success();

    let records = read_json(&root.join("diagnostics.json"));
    assert_eq!(records[0]["file"], "src/a.cpp");
}

#[test]
fn diagnostics_empty_log_writes_empty_array() {
    let (_dir, root) = setup();
    fs::write(root.join("build/diagnostics.txt"), "").unwrap();

    ci_annotate()
        .current_dir(&root)
        .arg("diagnostics")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(root.join("diagnostics.json")).unwrap(),
        "[]"
    );
}

#[test]
fn diagnostics_is_idempotent() {
    let (_dir, root) = setup();
    fs::write(
        root.join("build/diagnostics.txt"),
        "src/a.cpp:1:1: warning: w [-Wx]\n",
    )
    .unwrap();

    ci_annotate()
        .current_dir(&root)
        .arg("diagnostics")
        .assert()
        .success();
    let first = fs::read(root.join("diagnostics.json")).unwrap();

    ci_annotate()
        .current_dir(&root)
        .arg("diagnostics")
        .assert()
        .success();
    let second = fs::read(root.join("diagnostics.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn diagnostics_missing_log_fails() {
    let (_dir, root) = setup();

    ci_annotate()
        .current_dir(&root)
        .arg("diagnostics")
        .assert()
        .failure()
        .stderr(predicate::str::contains("diagnostics.txt"));

    assert!(!root.join("diagnostics.json").exists());
}

#[test]
fn tidy_converts_report() {
    let (_dir, root) = setup();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/a.cpp"), "int x = 5;\nint y = 7;\n").unwrap();
    fs::write(
        root.join("build/tidy.yaml"),
        format!(
            "\
Diagnostics:
  - DiagnosticName: readability-magic-numbers
    DiagnosticMessage:
      FilePath: {root}/src/a.cpp
      FileOffset: 0
      Message: 5 is a magic number
  - DiagnosticName: readability-magic-numbers
    DiagnosticMessage:
      FilePath: {root}/src/a.cpp
      FileOffset: 19
      Message: 7 is a magic number
",
            root = root.display()
        ),
    )
    .unwrap();

    ci_annotate().current_dir(&root).arg("tidy").assert().success();

    let records = read_json(&root.join("tidy-annotations.json"));
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["file"], "src/a.cpp");
    assert_eq!(records[0]["line"], 1);
    assert_eq!(records[0]["title"], "readability-magic-numbers");
    assert_eq!(records[0]["annotation_level"], "warning");

    assert_eq!(records[1]["line"], 2);
    assert_eq!(records[1]["message"], "7 is a magic number");
}

#[test]
fn tidy_empty_report_writes_nothing() {
    let (_dir, root) = setup();
    fs::write(root.join("build/tidy.yaml"), "").unwrap();

    ci_annotate().current_dir(&root).arg("tidy").assert().success();

    assert!(!root.join("tidy-annotations.json").exists());
}

#[test]
fn tidy_missing_source_file_fails() {
    let (_dir, root) = setup();
    fs::write(
        root.join("build/tidy.yaml"),
        format!(
            "\
Diagnostics:
  - DiagnosticName: some-check
    DiagnosticMessage:
      FilePath: {}/src/gone.cpp
      FileOffset: 0
      Message: whatever
",
            root.display()
        ),
    )
    .unwrap();

    ci_annotate()
        .current_dir(&root)
        .arg("tidy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gone.cpp"));

    assert!(!root.join("tidy-annotations.json").exists());
}

#[test]
fn schema_prints_annotation_schema() {
    ci_annotate()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("annotation_level"));
}
