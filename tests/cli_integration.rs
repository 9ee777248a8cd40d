//! Integration tests for the ragbuddy binary
//!
//! Uses --print-prompt so no Ollama server is needed.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn ragbuddy() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ragbuddy"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_print_prompt_uses_relevant_documents() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cat.txt"), "the cat sat on the mat").unwrap();
    fs::write(dir.path().join("dog.txt"), "dogs bark loudly").unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[retrieval]\ntop_k = 2\n").unwrap();

    let output = ragbuddy()
        .arg(dir.path())
        .args(["-q", "cat mat", "--print-prompt", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Context:\nthe cat sat on the mat\n\nQuestion: cat mat\nAnswer:"));
    assert!(!stdout.contains("dogs bark"));
}

#[test]
fn test_html_dir_is_converted_before_loading() {
    let html = TempDir::new().unwrap();
    let docs = TempDir::new().unwrap();
    fs::write(html.path().join("page.html"), "<h1>Ferris</h1><p>is a crab</p>").unwrap();
    let config = docs.path().join("ragbuddy.toml");
    fs::write(&config, "").unwrap();

    let output = ragbuddy()
        .arg(docs.path())
        .args(["-q", "who is ferris", "--print-prompt", "--config"])
        .arg(&config)
        .arg("--html-dir")
        .arg(html.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(docs.path().join("page.txt")).unwrap(), "Ferris is a crab");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Ferris is a crab"));
}

#[test]
fn test_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    let output = ragbuddy()
        .arg(dir.path().join("missing"))
        .args(["-q", "anything", "--print-prompt", "--config"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing"));
}
