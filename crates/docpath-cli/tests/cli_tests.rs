//! Integration tests for the `docpath` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, including stdin/stdout piping, file I/O, and
//! error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn docpath() -> Command {
    Command::cargo_bin("docpath").unwrap()
}

/// Helper: run a command and parse its stdout as JSON.
fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command must run");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout must be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Inspection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn kind_reports_root_type() {
    docpath()
        .arg("kind")
        .write_stdin("[1, 2]")
        .assert()
        .success()
        .stdout("array\n");

    docpath()
        .arg("kind")
        .write_stdin("\"text\"")
        .assert()
        .success()
        .stdout("string\n");
}

#[test]
fn keys_of_object_follow_document_order() {
    docpath()
        .args(["keys", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("store\nopen\nowner\nbooks\n");
}

#[test]
fn keys_of_array_are_indices() {
    docpath()
        .arg("keys")
        .write_stdin(r#"["a", "b", "c"]"#)
        .assert()
        .success()
        .stdout("0\n1\n2\n");
}

#[test]
fn len_counts_entries() {
    docpath()
        .args(["len", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn values_prints_one_compact_value_per_line() {
    docpath()
        .arg("values")
        .write_stdin(r#"{"b": [1, 2], "a": null}"#)
        .assert()
        .success()
        .stdout("[1,2]\nnull\n");
}

#[test]
fn keys_on_scalar_fails() {
    docpath()
        .arg("keys")
        .write_stdin("42")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Type mismatch"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Get
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_object_member() {
    let value = stdout_json(docpath().args(["get", "books", "-i", sample_json_path()]));
    assert_eq!(value.as_array().map(Vec::len), Some(3));
}

#[test]
fn get_array_element_by_index() {
    let value = stdout_json(docpath().args(["get", "1"]).write_stdin("[10, 20, 30]"));
    assert_eq!(value, json!(20));
}

#[test]
fn get_present_null_prints_null() {
    let value = stdout_json(docpath().args(["get", "owner", "-i", sample_json_path()]));
    assert_eq!(value, Value::Null);
}

#[test]
fn get_missing_key_is_lenient_by_default() {
    docpath()
        .args(["get", "missing"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("'missing' not found"));
}

#[test]
fn get_missing_key_strict_fails() {
    docpath()
        .args(["get", "x", "--strict"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Property ['x'] not found in the current context",
        ));
}

#[test]
fn get_keeps_leading_zero_key_text() {
    let value = stdout_json(
        docpath()
            .args(["get", "007"])
            .write_stdin(r#"{"007": "bond", "7": "seven"}"#),
    );
    assert_eq!(value, json!("bond"));
}

#[test]
fn get_leading_zero_key_on_array_is_an_index() {
    let value = stdout_json(docpath().args(["get", "01"]).write_stdin("[10, 20]"));
    assert_eq!(value, json!(20));
}

#[test]
fn get_out_of_range_index_fails() {
    docpath()
        .args(["get", "5"])
        .write_stdin("[1, 2]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 5 out of range"));
}

#[test]
fn get_named_key_on_array_fails() {
    docpath()
        .args(["get", "first"])
        .write_stdin("[1, 2]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid array index"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Set
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn set_array_index_inserts() {
    let value = stdout_json(
        docpath()
            .args(["set", "1", "--value", "99"])
            .write_stdin("[1, 2, 3]"),
    );
    assert_eq!(value, json!([1, 99, 2, 3]));
}

#[test]
fn set_array_without_key_appends() {
    let value = stdout_json(
        docpath()
            .args(["set", "--value", r#"{"k": true}"#])
            .write_stdin("[1]"),
    );
    assert_eq!(value, json!([1, {"k": true}]));
}

#[test]
fn set_object_member_keeps_key_order() {
    let value = stdout_json(
        docpath()
            .args(["set", "a", "--value", "\"new\""])
            .write_stdin(r#"{"a": 1, "b": 2}"#),
    );
    assert_eq!(value, json!({"a": "new", "b": 2}));
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn set_leading_zero_key_writes_that_member() {
    let value = stdout_json(
        docpath()
            .args(["set", "007", "--value", "\"licensed\""])
            .write_stdin(r#"{"7": "seven"}"#),
    );
    assert_eq!(value, json!({"7": "seven", "007": "licensed"}));
}

#[test]
fn set_object_without_key_fails() {
    docpath()
        .args(["set", "--value", "1"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("A key is required"));
}

#[test]
fn set_negative_index_fails() {
    docpath()
        .args(["set", "-1", "--value", "0"])
        .write_stdin("[1]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index -1 out of range"));
}

#[test]
fn set_rejects_invalid_value_json() {
    docpath()
        .args(["set", "a", "--value", "{not json"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse --value as JSON"));
}

#[test]
fn set_file_to_file() {
    let output_path = std::env::temp_dir().join("docpath-test-set-output.json");
    let _ = std::fs::remove_file(&output_path);

    docpath()
        .args(["set", "manager", "--value", "\"Ada\"", "-i", sample_json_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written["manager"], json!("Ada"));
    assert_eq!(written["books"][2]["title"], json!("The Lord of the Rings"));
    let _ = std::fs::remove_file(&output_path);
}

// ─────────────────────────────────────────────────────────────────────────────
// Input errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_input_json_fails() {
    docpath()
        .arg("len")
        .write_stdin("{broken")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input JSON"));
}

#[test]
fn missing_input_file_fails() {
    docpath()
        .args(["len", "-i", "/nonexistent/docpath.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
