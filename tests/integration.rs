use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn mex_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("mex");
    path
}

fn run_mex(args: &[&str]) -> (String, String, bool) {
    let binary = mex_binary();
    let output = Command::new(&binary)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run mex binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Eight lines with markers on lines 0, 3, 5, and 7.
const MARKED: &str = "###\na\nb\n###\nc\n###\nd\n###\n";

#[test]
fn test_extract_disjoint() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "notes.txt", MARKED);

    let (stdout, _, success) = run_mex(&["extract", file.to_str().unwrap()]);
    assert!(success, "extract failed: {}", stdout);
    assert!(stdout.contains("--- Paragraphs (2) ---"));
    assert!(stdout.contains("[paragraph 1]"));
    assert!(stdout.contains("a\nb\n"));
    assert!(stdout.contains("[paragraph 2]"));
    assert!(stdout.contains("c\n###\nd\n"));
}

#[test]
fn test_extract_overlapping() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "notes.txt", MARKED);

    let (stdout, _, success) = run_mex(&["extract", file.to_str().unwrap(), "--overlapping"]);
    assert!(success);
    // four markers give three overlapping pairs
    assert!(stdout.contains("--- Paragraphs (3) ---"));
}

#[test]
fn test_extract_custom_marker() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "notes.txt", "intro\n@@\nx\ny\n@@\ntail\n");

    let (stdout, _, success) = run_mex(&["extract", file.to_str().unwrap(), "--marker", "@@"]);
    assert!(success);
    assert!(stdout.contains("--- Paragraphs (1) ---"));
    assert!(stdout.contains("x\ny\n"));
}

#[test]
fn test_extract_no_markers() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "plain.txt", "no markers here\njust text\n");

    let (stdout, _, success) = run_mex(&["extract", file.to_str().unwrap()]);
    assert!(success, "Extraction without markers should not fail");
    assert!(stdout.contains("No paragraphs extracted."));
}

#[test]
fn test_extract_single_marker() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "one.txt", "text\n###\nmore\n");

    let (stdout, _, success) = run_mex(&["extract", file.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("No paragraphs extracted."));
}

#[test]
fn test_extract_warns_on_odd_marker_count() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "odd.txt", "x\n###\na\n###\nb\n###\n");

    let (stdout, stderr, success) = run_mex(&["extract", file.to_str().unwrap()]);
    assert!(success, "Odd marker count must not fail");
    assert!(stdout.contains("--- Paragraphs (1) ---"));
    assert!(
        stderr.contains("odd marker count"),
        "Expected odd-count warning, got: {}",
        stderr
    );
}

#[test]
fn test_extract_warns_on_line_zero_marker() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "zero.txt", MARKED);

    let (_, stderr, success) = run_mex(&["extract", file.to_str().unwrap()]);
    assert!(success);
    assert!(
        stderr.contains("line 0"),
        "Expected line-zero warning, got: {}",
        stderr
    );
}

#[test]
fn test_extract_json() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "notes.txt", MARKED);

    let (stdout, _, success) = run_mex(&["extract", file.to_str().unwrap(), "--format", "json"]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let paragraphs = value["paragraphs"].as_array().unwrap();
    assert_eq!(paragraphs.len(), 2);
    // the position map holds the same content as the sequence
    assert_eq!(value["by_position"]["1"], paragraphs[0]);
    assert_eq!(value["by_position"]["2"], paragraphs[1]);
}

#[test]
fn test_extract_separator() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "sep.txt", "x\n###\na\nb\n###\n");

    let (stdout, _, success) = run_mex(&[
        "extract",
        file.to_str().unwrap(),
        "--separator",
        " | ",
    ]);
    assert!(success);
    assert!(stdout.contains("a\n | b\n"));
}

#[test]
fn test_extract_deterministic() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "notes.txt", MARKED);

    let (stdout1, _, _) = run_mex(&["extract", file.to_str().unwrap()]);
    let (stdout2, _, _) = run_mex(&["extract", file.to_str().unwrap()]);
    assert_eq!(
        stdout1, stdout2,
        "Extraction output should be identical across runs"
    );
}

#[test]
fn test_extract_missing_file_fails() {
    let (_, stderr, success) = run_mex(&["extract", "/nonexistent/input.txt"]);
    assert!(!success, "Missing source file should fail");
    assert!(
        stderr.contains("failed to read source file"),
        "Should report unreadable source, got: {}",
        stderr
    );
}

#[test]
fn test_scan_reports_marker_positions() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "notes.txt", MARKED);

    let (stdout, _, success) = run_mex(&["scan", file.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("marker lines:  [0, 3, 5, 7]"));
    assert!(stdout.contains("non-overlapping"));
    assert!(stdout.contains("overlapping"));
    assert!(stdout.contains("2 paragraphs"));
    assert!(stdout.contains("3 paragraphs"));
}

#[test]
fn test_scan_no_markers() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "plain.txt", "nothing here\n");

    let (stdout, _, success) = run_mex(&["scan", file.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("marker lines:  []"));
    assert!(stdout.contains("no complete pairs"));
}

#[test]
fn test_batch_extracts_matching_files() {
    let tmp = TempDir::new().unwrap();
    let notes = tmp.path().join("notes");
    fs::create_dir_all(&notes).unwrap();
    write_file(&notes, "alpha.txt", "x\n###\na\n###\n");
    write_file(&notes, "beta.md", "x\n###\nb\n###\n");
    write_file(&notes, "gamma.rs", "x\n###\nc\n###\n");

    let (stdout, _, success) = run_mex(&["batch", notes.to_str().unwrap()]);
    assert!(success, "batch failed: {}", stdout);
    assert!(stdout.contains("files scanned: 2"));
    assert!(stdout.contains("files skipped: 0"));
    assert!(stdout.contains("paragraphs extracted: 2"));
}

#[test]
fn test_batch_include_glob() {
    let tmp = TempDir::new().unwrap();
    let notes = tmp.path().join("notes");
    fs::create_dir_all(&notes).unwrap();
    write_file(&notes, "alpha.txt", "x\n###\na\n###\n");
    write_file(&notes, "beta.md", "x\n###\nb\n###\n");

    let (stdout, _, success) = run_mex(&[
        "batch",
        notes.to_str().unwrap(),
        "--include",
        "**/*.txt",
    ]);
    assert!(success);
    assert!(stdout.contains("files scanned: 1"));
    assert!(stdout.contains("alpha.txt"));
    assert!(!stdout.contains("beta.md"));
}

#[test]
fn test_batch_json_lines() {
    let tmp = TempDir::new().unwrap();
    let notes = tmp.path().join("notes");
    fs::create_dir_all(&notes).unwrap();
    write_file(&notes, "alpha.txt", "x\n###\na\n###\n");
    write_file(&notes, "beta.txt", "x\n###\nb\n###\n");

    let (stdout, _, success) = run_mex(&["batch", notes.to_str().unwrap(), "--format", "json"]);
    assert!(success);

    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["file"].is_string());
        assert_eq!(value["paragraphs"].as_array().unwrap().len(), 1);
    }
}

#[test]
fn test_batch_missing_root_fails() {
    let (_, stderr, success) = run_mex(&["batch", "/nonexistent/root"]);
    assert!(!success, "Missing batch root should fail");
    assert!(
        stderr.contains("does not exist"),
        "Should report missing root, got: {}",
        stderr
    );
}
