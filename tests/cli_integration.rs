#![cfg(feature = "cli")]

use std::process::Command;
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_blockdelta").to_string()
}

#[test]
fn cli_encode_decode_roundtrip() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.bin");
    let target = dir.path().join("target.bin");
    let delta = dir.path().join("delta.bd");
    let output = dir.path().join("output.bin");

    std::fs::write(&source, b"abcde12345abcde12345abcde12345").unwrap();
    std::fs::write(&target, b"abcdeXXXXXabcde12345abcde12345!").unwrap();

    let st = Command::new(bin())
        .arg("encode")
        .arg(&source)
        .arg(&target)
        .arg(&delta)
        .status()
        .unwrap();
    assert!(st.success());

    let st = Command::new(bin())
        .arg("decode")
        .arg(&source)
        .arg(&delta)
        .arg(&output)
        .status()
        .unwrap();
    assert!(st.success());
    assert_eq!(
        std::fs::read(&output).unwrap(),
        std::fs::read(&target).unwrap()
    );
}

#[test]
fn cli_refuses_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.bin");
    let target = dir.path().join("target.bin");
    let delta = dir.path().join("delta.bd");

    std::fs::write(&source, b"source data").unwrap();
    std::fs::write(&target, b"target data").unwrap();
    std::fs::write(&delta, b"pre-existing").unwrap();

    let st = Command::new(bin())
        .arg("encode")
        .arg(&source)
        .arg(&target)
        .arg(&delta)
        .status()
        .unwrap();
    assert!(!st.success(), "should refuse to overwrite without --force");

    let st = Command::new(bin())
        .arg("encode")
        .arg(&source)
        .arg(&target)
        .arg(&delta)
        .arg("--force")
        .status()
        .unwrap();
    assert!(st.success());
}

#[test]
fn cli_json_stats_on_stderr() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.bin");
    let target = dir.path().join("target.bin");
    let delta = dir.path().join("delta.bd");

    std::fs::write(&source, b"0123456789abcdef0123456789abcdef").unwrap();
    std::fs::write(&target, b"0123456789abcdef0123456789abcdefXY").unwrap();

    let out = Command::new(bin())
        .arg("encode")
        .arg(&source)
        .arg(&target)
        .arg(&delta)
        .arg("--json")
        .output()
        .unwrap();
    assert!(out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(parsed["command"], "encode");
    assert_eq!(parsed["target_size"], 34);
}

#[test]
fn cli_decode_rejects_corrupt_delta() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.bin");
    let delta = dir.path().join("delta.bd");
    let output = dir.path().join("output.bin");

    std::fs::write(&source, b"source data").unwrap();
    std::fs::write(&delta, [0xEEu8, 0x42]).unwrap();

    let st = Command::new(bin())
        .arg("decode")
        .arg(&source)
        .arg(&delta)
        .arg(&output)
        .status()
        .unwrap();
    assert!(!st.success());
}
