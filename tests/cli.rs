//! CLI integration tests for sextet
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn sextet() -> Command {
    Command::cargo_bin("sextet").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    sextet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("padded base64"));
}

#[test]
fn test_version() {
    sextet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sextet"));
}

#[test]
fn test_config_list() {
    sextet()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base64"));
}

#[test]
fn test_config_show() {
    sextet()
        .args(["config", "show", "base64"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        ))
        .stdout(predicate::str::contains("padding: ="));
}

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_stdin() {
    sextet()
        .arg("encode")
        .write_stdin("Man")
        .assert()
        .success()
        .stdout("TWFu\n");
}

#[test]
fn test_encode_padding() {
    sextet()
        .arg("encode")
        .write_stdin("Ma")
        .assert()
        .success()
        .stdout("TWE=\n");
}

#[test]
fn test_decode_stdin_trims_newline() {
    sextet()
        .arg("decode")
        .write_stdin("TQ==\n")
        .assert()
        .success()
        .stdout("M");
}

#[test]
fn test_encode_utf16() {
    sextet()
        .args(["encode", "--utf16"])
        .write_stdin("Ma")
        .assert()
        .success()
        .stdout("TQBhAA==\n");
}

#[test]
fn test_decode_utf16() {
    sextet()
        .args(["decode", "--utf16"])
        .write_stdin("TQBhAA==")
        .assert()
        .success()
        .stdout("Ma");
}

#[test]
fn test_encode_file_to_output() {
    let dir = std::env::temp_dir().join(format!("sextet-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("input.bin");
    let output = dir.join("output.txt");
    std::fs::write(&input, [0x4D, 0x61, 0x6E, 0x4D]).unwrap();

    sextet()
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "TWFuTQ==\n");
    std::fs::remove_dir_all(&dir).unwrap();
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_decode_invalid_length() {
    sextet()
        .arg("decode")
        .write_stdin("TWF")
        .assert()
        .failure()
        .stderr(predicate::str::contains("multiple of 4"));
}

#[test]
fn test_decode_invalid_character() {
    sextet()
        .arg("decode")
        .write_stdin("TW!u")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '!' at position 2"));
}

#[test]
fn test_unknown_alphabet_suggests() {
    sextet()
        .args(["encode", "-a", "bas64"])
        .write_stdin("Man")
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'base64'?"));
}
