use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docblockr")));
    cmd.env_remove("DOCBLOCKR_LOG");
    cmd
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// -- generate --

#[test]
fn generate_plain_from_file() {
    let expected = std::fs::read_to_string(fixture_path("add.expected.txt")).unwrap();

    let assert = cmd()
        .args(["generate", "-l", "javascript", "--plain"])
        .arg(fixture_path("add.js"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn generate_snippet_from_stdin() {
    cmd()
        .args(["generate", "-l", "js"])
        .write_stdin("function add(a, b) {}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(" * ${0:summary}"))
        .stdout(predicate::str::contains("@param {${1:type}} a - ${2:description}"));
}

#[test]
fn generate_fallback_block() {
    cmd()
        .args(["generate", "-l", "java", "--plain"])
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout("/**\n * comment\n */\n");
}

#[test]
fn generate_json() {
    cmd()
        .args(["generate", "-l", "rust", "--json"])
        .arg(fixture_path("len.rs"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\": \"rust\""))
        .stdout(predicate::str::contains("\"shape\": \"callable\""))
        .stdout(predicate::str::contains("\"name\": \"len\""));
}

#[test]
fn generate_json_null_when_nothing_classified() {
    cmd()
        .args(["generate", "-l", "php", "--json"])
        .write_stdin("// just a comment\n")
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn generate_rustdoc() {
    cmd()
        .args(["generate", "-l", "rust", "--plain"])
        .arg(fixture_path("len.rs"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/// description\n"));
}

#[test]
fn unknown_language_fails() {
    cmd()
        .args(["generate", "-l", "cobol"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported language: cobol"));
}

#[test]
fn disabled_language_fails() {
    let config = config_file("[languages.swift]\nenabled = false\n");

    cmd()
        .args(["generate", "-l", "swift", "--config"])
        .arg(config.path())
        .write_stdin("func run() {}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("disabled"));
}

#[test]
fn invalid_config_fails() {
    let config = config_file("align-tags = 7\n");

    cmd()
        .args(["tags", "-l", "java", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn missing_input_file() {
    cmd()
        .args(["generate", "-l", "java", "/nonexistent/Foo.java"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// -- format --

#[test]
fn format_to_stdout() {
    let expected = std::fs::read_to_string(fixture_path("Reader.expected.java")).unwrap();

    let assert = cmd()
        .args(["format", "-l", "java"])
        .arg(fixture_path("Reader.java"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn format_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Reader.java");
    std::fs::copy(fixture_path("Reader.java"), &path).unwrap();

    cmd()
        .args(["format", "-l", "java", "--in-place"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    let output = std::fs::read_to_string(&path).unwrap();
    let expected = std::fs::read_to_string(fixture_path("Reader.expected.java")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn format_wraps_at_width() {
    let input = "/**\n * @param {string} name - the name to greet when nobody else is around\n */\n";

    cmd()
        .args(["format", "-l", "javascript", "--width", "48"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(concat!(
            "/**\n",
            " * @param {string} name - the name to greet when\n",
            " *                        nobody else is around\n",
            " */\n",
        ));
}

// -- tags --

#[test]
fn tags_by_prefix() {
    cmd()
        .args(["tags", "-l", "javascript", "@pa"])
        .assert()
        .success()
        .stdout("package\nparam {${0:type}} ${1:name} - ${2:description}\n");
}

#[test]
fn tags_json() {
    cmd()
        .args(["tags", "-l", "ruby", "yieldr", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tag\": \"yieldreturn\""));
}

// -- header --

#[test]
fn header_with_custom_tags() {
    let dir = TempDir::new().unwrap();
    let config = config_file("custom-tags = [\"@license MIT\"]\n");

    cmd()
        .current_dir(dir.path())
        .args(["header", "-l", "javascript", "--plain"])
        .args(["--file-name", "main.js", "--workspace", "demo", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout("/**\n * main.js\n * demo\n *\n * @license MIT\n */\n");
}

#[test]
fn header_keeps_host_tokens() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["header", "-l", "rust"])
        .assert()
        .success()
        .stdout("//! $FILENAME\n//! $WORKSPACE_NAME\n");
}

#[test]
fn header_reads_config_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("docblockr.toml"),
        "custom-tags = [\"@author Jane\"]\n",
    )
    .unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["header", "-l", "php", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" * @author Jane"));
}
