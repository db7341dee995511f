use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SPEC: &str = r#"describe('MyClass (with parens)', () => {
  it('should handle [special] chars', () => {});
  it('works', () => {});
});
"#;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("test")).unwrap();
    fs::write(dir.path().join("test/my.spec.js"), SPEC).unwrap();
    fs::write(dir.path().join(".mocha-lens.json"), r#"{ "mocha_path": "mocha" }"#).unwrap();
    dir
}

fn mocha_lens(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mocha-lens").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_pattern_for_case() {
    let dir = project();
    mocha_lens(&dir)
        .args(["pattern", "test/my.spec.js:2"])
        .assert()
        .success()
        .stdout("^MyClass \\(with parens\\) should handle \\[special\\] chars$\n");
}

#[test]
fn test_pattern_requires_line() {
    let dir = project();
    mocha_lens(&dir)
        .args(["pattern", "test/my.spec.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line number is required"));
}

#[test]
fn test_command_for_suite() {
    let dir = project();
    mocha_lens(&dir)
        .args(["command", "test/my.spec.js:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mocha test/my.spec.js --grep '^MyClass \\(with parens\\)'",
        ));
}

#[test]
fn test_debug_command_json() {
    let dir = project();
    let output = mocha_lens(&dir)
        .args(["command", "test/my.spec.js:3", "--debug", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["program"], "node");
    assert_eq!(json["args"][0], "--inspect-brk=9229");
    assert_eq!(json["grep"], "^MyClass \\(with parens\\) works$");
}

#[test]
fn test_analyze_lists_blocks() {
    let dir = project();
    mocha_lens(&dir)
        .args(["analyze", "test/my.spec.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 block(s): 1 suite(s), 2 test(s)"))
        .stdout(predicate::str::contains("^MyClass \\(with parens\\) works$"));
}

#[test]
fn test_analyze_missing_file() {
    let dir = project();
    mocha_lens(&dir)
        .args(["analyze", "test/nope.spec.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    let cwd = dir.path().to_str().unwrap();
    mocha_lens(&dir)
        .args(["init", "--cwd", cwd])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));
    assert!(dir.path().join(".mocha-lens.json").exists());

    mocha_lens(&dir)
        .args(["init", "--cwd", cwd])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
