//! Fixture-driven record tests.
//!
//! Each fixture under tests/fixtures/ has:
//! - case.json: input records plus the operation parameters
//! - expect.json: the expected output
//!
//! The tests load a case, run the named operation, and compare the
//! serialized output to the expectation exactly.

use comb_record::{comparing_keys, get_path};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load(name: &str, file: &str) -> Value {
    let path = fixtures_dir().join(name).join(file);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}

fn assert_matches_expectation(name: &str, got: &Value, expected: &Value) {
    assert_eq!(
        got,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(got).unwrap(),
        serde_json::to_string_pretty(expected).unwrap(),
    );
}

#[derive(Deserialize)]
struct SortCase {
    records: Vec<Value>,
    keys: Vec<String>,
}

fn run_sort_fixture(name: &str) {
    let case: SortCase = serde_json::from_value(load(name, "case.json"))
        .unwrap_or_else(|e| panic!("bad sort case {name}: {e}"));
    let expected = load(name, "expect.json");

    let keys: Vec<&str> = case.keys.iter().map(String::as_str).collect();
    let mut records = case.records;
    records.sort_by(comparing_keys(&keys));

    assert_matches_expectation(name, &Value::Array(records), &expected);
}

#[derive(Deserialize)]
struct PathCase {
    record: Value,
    paths: Vec<String>,
}

fn run_path_fixture(name: &str) {
    let case: PathCase = serde_json::from_value(load(name, "case.json"))
        .unwrap_or_else(|e| panic!("bad path case {name}: {e}"));
    let expected = load(name, "expect.json");

    let got: Vec<Value> = case
        .paths
        .iter()
        .map(|p| get_path(p.as_str())(&case.record).cloned().unwrap_or(Value::Null))
        .collect();

    assert_matches_expectation(name, &Value::Array(got), &expected);
}

#[test]
fn sort_by_single_key() {
    run_sort_fixture("sort_by_single_key");
}

#[test]
fn sort_by_two_keys_with_missing_fields() {
    run_sort_fixture("sort_by_two_keys_with_missing_fields");
}

#[test]
fn dotted_path_access() {
    run_path_fixture("dotted_path_access");
}
