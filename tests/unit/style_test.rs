//! Tests for the style-check wrapper

use std::path::{Path, PathBuf};

use sitetool::style::{StyleRunner, artifact_paths};

use crate::common::TestTree;

// =============================================================================
// Artifact naming
// =============================================================================

#[test]
fn artifacts_suffix_the_stem_and_keep_the_extension() {
    let (stderr, stdout) = artifact_paths(Path::new("out/style.txt"));
    assert_eq!(stderr, PathBuf::from("out/style-stderr.txt"));
    assert_eq!(stdout, PathBuf::from("out/style-stdout.txt"));
}

#[test]
fn artifacts_for_extensionless_target() {
    let (stderr, stdout) = artifact_paths(Path::new("stylecheck"));
    assert_eq!(stderr, PathBuf::from("stylecheck-stderr"));
    assert_eq!(stdout, PathBuf::from("stylecheck-stdout"));
}

// =============================================================================
// Runner behavior (uses standard unix tools as stand-in lint commands)
// =============================================================================

#[test]
fn clean_run_writes_both_artifacts() {
    let tree = TestTree::empty();
    let target = tree.path().join("style.txt");

    let report = StyleRunner::new("true").run(&[], &target).unwrap();

    assert!(report.passed());
    assert_eq!(report.exit_code, 0);
    assert!(tree.path().join("style-stderr.txt").exists());
    assert!(tree.path().join("style-stdout.txt").exists());
}

#[test]
fn only_c_files_are_handed_to_the_lint_tool() {
    let tree = TestTree::empty();
    let target = tree.path().join("style.txt");

    let files = vec![
        PathBuf::from("engine.c"),
        PathBuf::from("engine.h"),
        PathBuf::from("README.md"),
    ];
    // `echo` reflects its arguments, so the stdout artifact shows exactly
    // what the lint tool would have been given.
    let report = StyleRunner::new("echo").run(&files, &target).unwrap();

    assert_eq!(report.files_checked, 1);
    assert!(report.stdout.contains("engine.c"));
    assert!(!report.stdout.contains("engine.h"));
    assert!(!report.stdout.contains("README.md"));

    let stdout_artifact = std::fs::read_to_string(tree.path().join("style-stdout.txt")).unwrap();
    assert_eq!(stdout_artifact, report.stdout);
}

#[test]
fn failing_lint_is_a_report_not_an_error() {
    let tree = TestTree::empty();
    let target = tree.path().join("style.txt");

    let report = StyleRunner::new("false").run(&[], &target).unwrap();

    assert!(!report.passed());
    assert_ne!(report.exit_code, 0);
}

#[test]
fn missing_lint_command_is_an_error() {
    let tree = TestTree::empty();
    let target = tree.path().join("style.txt");

    let result = StyleRunner::new("no-such-lint-tool-xyz").run(&[], &target);
    assert!(result.is_err());
}

#[test]
fn unwritable_artifact_path_is_an_error() {
    let tree = TestTree::empty();
    let target = tree.path().join("missing-dir/style.txt");

    let result = StyleRunner::new("true").run(&[], &target);
    assert!(result.is_err());
}
