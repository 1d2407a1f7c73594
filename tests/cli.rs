//! Integration tests driving the `fts` binary.

use fts::QueryMatch;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

static FIXTURE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get or create the test fixture directory (singleton)
fn fixture_dir() -> PathBuf {
    FIXTURE_DIR.get_or_init(create_fixture_dir).clone()
}

fn create_fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir()
        .join("fts_test_fixtures")
        .join(format!("cli_{}", std::process::id()));

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("nested")).expect("Failed to create fixture dir");

    fs::write(
        dir.join("main.rs"),
        r#"fn main() {
    println!("Hello, world!");
    helper();
}

fn helper() {
    println!("Helper");
}
"#,
    )
    .unwrap();

    fs::write(dir.join("nested/notes.txt"), "remember to call println\n").unwrap();

    // Excluded by extension even though it contains the query
    fs::write(dir.join("logo.png"), "println").unwrap();

    dir
}

/// Config path that never exists, so every run uses the defaults
fn missing_config() -> PathBuf {
    std::env::temp_dir().join(format!("fts_no_config_{}.json", std::process::id()))
}

/// Run fts with given args, returning (stdout, stderr, success)
fn run_fts(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_fts"))
        .args(args)
        .arg("--config")
        .arg(missing_config())
        .output()
        .expect("Failed to run fts");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn fixture_arg() -> String {
    fixture_dir().to_string_lossy().into_owned()
}

#[test]
fn test_query_prints_path_offset_and_line() {
    let dir = fixture_arg();
    let (stdout, stderr, success) = run_fts(&["query", &dir, "println", "-q"]);
    assert!(success, "stderr: {stderr}");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "stdout: {stdout}");
    assert!(lines[0].starts_with("main.rs:16:"));
    assert!(lines[0].ends_with("println!(\"Hello, world!\");"));
    assert!(lines[1].starts_with("main.rs:"));
    assert!(lines[1].ends_with("println!(\"Helper\");"));
    assert_eq!(lines[2], "nested/notes.txt:17:remember to call println");
}

#[test]
fn test_query_is_case_sensitive() {
    let dir = fixture_arg();
    let (stdout, _, success) = run_fts(&["query", &dir, "PRINTLN", "-q"]);
    assert!(success);
    assert!(stdout.is_empty());
}

#[test]
fn test_query_count() {
    let dir = fixture_arg();
    let (stdout, _, success) = run_fts(&["query", &dir, "println", "--count", "-q"]);
    assert!(success);
    assert_eq!(stdout, "main.rs:2\nnested/notes.txt:1\n");
}

#[test]
fn test_query_json() {
    let dir = fixture_arg();
    let (stdout, _, success) = run_fts(&["query", &dir, "helper", "--json"]);
    assert!(success);

    let matches: Vec<QueryMatch> = serde_json::from_str(&stdout).unwrap();
    let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
    assert!(matches.iter().all(|m| m.path == "main.rs"));
    assert_eq!(offsets.len(), 2);
    assert!(offsets[0] < offsets[1]);
}

#[test]
fn test_serial_and_naive_runs_agree() {
    let dir = fixture_arg();
    let (tree, _, _) = run_fts(&["query", &dir, "l", "-q"]);
    let (naive, _, success) = run_fts(&["query", &dir, "l", "-q", "--serial", "--max-tree-chars", "1"]);
    assert!(success);
    assert_eq!(tree, naive);
}

#[test]
fn test_stats() {
    let dir = fixture_arg();
    let (stdout, _, success) = run_fts(&["stats", &dir, "-q"]);
    assert!(success);
    assert!(stdout.contains("Files:          3"), "stdout: {stdout}");
    assert!(stdout.contains("suffix tree:  2"));
    assert!(stdout.contains("not indexed:  1"));
}

#[test]
fn test_missing_directory_fails() {
    let missing = fixture_dir().join("does-not-exist");
    let (_, stderr, success) = run_fts(&["query", &missing.to_string_lossy(), "x"]);
    assert!(!success);
    assert!(stderr.contains("doesn't exist"), "stderr: {stderr}");
}

#[test]
fn test_interactive_session() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fts"))
        .arg(fixture_dir())
        .arg("--config")
        .arg(missing_config())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run fts");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"\nprintln\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Finished indexing in "));
    assert!(stdout.contains("\nprintln!(\"Helper\");\n"));
    assert!(stdout.contains("\nremember to call println\n"));
    assert!(stdout.contains("Found 3 matching lines in "));
}
