//! End-to-end tests for the `ragchunk` binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const DOC: &str = "Retrieval needs context. Chunks carry it.\n\n\
1. Split the document.\n\
2. Embed every chunk.\n\n\
Closing remarks go here.";

fn ragchunk() -> Command {
    Command::cargo_bin("ragchunk").expect("binary is built")
}

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write temp file");
    file
}

#[test]
fn test_chunks_stdin_with_defaults() {
    ragchunk()
        .write_stdin("A. B. C.")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- chunk 1 [4 tokens, Sentence] ---"))
        .stdout(predicate::str::contains("A. B. C."))
        .stdout(predicate::str::contains("=== 1 chunks, 4 tokens total"));
}

#[test]
fn test_chunks_file_as_json() {
    let file = temp_file(DOC);

    let output = ragchunk()
        .arg(file.path())
        .args(["--strategy", "semantic", "--format", "json"])
        .output()
        .expect("Failed to run ragchunk");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let chunks = json["chunks"].as_array().expect("chunks array");
    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[1]["text"], "1. Split the document.");
    assert_eq!(chunks[1]["origin"], "section");
    assert_eq!(json["notices"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_notice_goes_to_stderr() {
    ragchunk()
        .args(["-s", "paragraph", "-t", "50", "-o", "5"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stderr(predicate::str::contains("notice: overlap of 5 tokens"))
        .stdout(predicate::str::contains("notice").not());
}

#[test]
fn test_invalid_overlap_fails() {
    ragchunk()
        .args(["-t", "10", "-o", "10"])
        .write_stdin(DOC)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid chunking configuration"))
        .stderr(predicate::str::contains("must be smaller than target size"));
}

#[test]
fn test_config_file_with_flag_override() {
    let config = temp_file(r#"{"strategy": "fixed-size", "target_size": 10, "overlap_size": 0}"#);
    let words: Vec<String> = (0..20).map(|i| format!("w{}", i)).collect();

    ragchunk()
        .arg("--config")
        .arg(config.path())
        .args(["--target-size", "20"])
        .write_stdin(words.join(" "))
        .assert()
        .success()
        // 20 tokens -> 15 words per window
        .stdout(predicate::str::contains("=== 2 chunks"));
}

#[test]
fn test_missing_input_file_fails() {
    ragchunk()
        .arg("/nonexistent/document.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input"));
}

#[test]
fn test_char_estimator() {
    ragchunk()
        .args(["--estimator", "chars", "-s", "sentence", "-t", "100", "-o", "0"])
        .write_stdin("abcdefgh.")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2 tokens, Sentence]"));
}
