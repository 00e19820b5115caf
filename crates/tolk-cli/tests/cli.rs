//! End-to-end tests for the tolk binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn tolk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tolk"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

fn catalogs() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "en.json",
        r#"{
            "hello": ["Hello, ", {"arg": "name"}, "."],
            "items": ["You have ", {"arg": "n", "plural": "item"}, "."],
            "item.one": "item",
            "item.other": "items",
            "color": "colour"
        }"#,
    );
    write(
        dir.path(),
        "de.json",
        r#"{"hello": ["Hallo, ", {"arg": "name"}, "."]}"#,
    );
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_check_valid_files() {
    let dir = catalogs();
    let en = dir.path().join("en.json").display().to_string();
    let output = tolk(&["check", &en]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert!(stdout(&output).contains("5 messages"));
}

#[test]
fn test_check_reports_invalid_pattern() {
    let dir = TempDir::new().unwrap();
    let bad = write(dir.path(), "fr.json", r#"{"hello": [{"arg": -1}]}"#);
    let output = tolk(&["check", "--json", &bad]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(json[0]["error"].as_str().unwrap().contains("hello"));
}

#[test]
fn test_check_reports_invalid_json() {
    let dir = TempDir::new().unwrap();
    let bad = write(dir.path(), "fr.json", "{\"hello\": }");
    let output = tolk(&["check", &bad]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
}

#[test]
fn test_eval() {
    let dir = catalogs();
    let path = dir.path().display().to_string();
    let output = tolk(&[
        "eval", "--catalog", &path, "--default-locale", "en", "--key", "hello", "-p", "name=Welt",
        "--locale", "de_AT",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output).trim(), "Hallo, Welt.");
}

#[test]
fn test_eval_numbers_and_json() {
    let dir = catalogs();
    let path = dir.path().display().to_string();
    let output = tolk(&[
        "eval", "--catalog", &path, "--default-locale", "en", "--key", "items", "-p", "n=1",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["result"], "You have 1 item.");
    assert_eq!(json["locale"], "en");
}

#[test]
fn test_eval_missing_text() {
    let dir = catalogs();
    let path = dir.path().display().to_string();
    let strict = tolk(&[
        "eval", "--catalog", &path, "--default-locale", "en", "--key", "colr",
    ]);
    assert_eq!(strict.status.code(), Some(exitcode::DATAERR));
    assert!(String::from_utf8_lossy(&strict.stderr).contains("did you mean: color?"));

    let lenient = tolk(&[
        "eval", "--catalog", &path, "--default-locale", "en", "--key", "colr", "--lenient",
    ]);
    assert_eq!(lenient.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&lenient).trim(), "MessageRequest(colr, [], {})");
}

#[test]
fn test_coverage() {
    let dir = catalogs();
    let en = dir.path().join("en.json").display().to_string();
    let output = tolk(&["coverage", "--source", &en, "--lang", "de,it", "--json"]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json[0]["locale"], "de");
    assert_eq!(json[0]["translated"], 1);
    assert_eq!(json[0]["total"], 5);
    assert_eq!(json[1]["translated"], 0);

    let strict = tolk(&["coverage", "--source", &en, "--lang", "de", "--strict"]);
    assert_eq!(strict.status.code(), Some(exitcode::DATAERR));
}

#[test]
fn test_coverage_source_locale_in_separate_translations_dir() {
    let source_dir = TempDir::new().unwrap();
    let en = write(source_dir.path(), "en.json", r#"{"a": "A"}"#);
    let translations = TempDir::new().unwrap();
    write(
        translations.path(),
        "en.json",
        r#"{"a": "A", "b": "B", "c": "C"}"#,
    );
    write(translations.path(), "de.json", "{}");
    let dir = translations.path().display().to_string();

    let output = tolk(&[
        "coverage",
        "--source",
        &en,
        "--translations",
        &dir,
        "--lang",
        "en,de",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json[0]["locale"], "en");
    assert_eq!(json[0]["translated"], 1);
    assert_eq!(json[0]["total"], 1);
    assert_eq!(json[1]["locale"], "de");
    assert_eq!(json[1]["translated"], 0);
    assert_eq!(json[1]["total"], 1);
    assert_eq!(json[1]["missing"], serde_json::json!(["a"]));
}
