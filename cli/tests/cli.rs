//! End-to-end CLI tests, grounded on faxc-drv's `tests/e2e/cli_tests.rs`:
//! drive the built `j2pc` binary with `assert_cmd` instead of calling the
//! driver crate directly, asserting on stdout/stderr/exit code.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn j2pc() -> Command {
    Command::cargo_bin("j2pc").expect("built j2pc binary")
}

fn write_source(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn cli_help_output() {
    j2pc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("j2pc"));
}

#[test]
fn cli_version_output() {
    j2pc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("j2pc"));
}

#[test]
fn translate_scenario_a_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_source(
        &dir,
        "ex.j",
        "class Ex { static int x = 4, y; int z = 3; int foo() { return z; } }",
    );

    j2pc()
        .arg("translate")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("class Ex(object):")
                .and(predicate::str::contains("x = 4"))
                .and(predicate::str::contains("def foo(self):"))
                .and(predicate::str::contains("return self.z")),
        );
}

#[test]
fn translate_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "ex.j", "public class HelloWorld extends Example { }");
    let output = dir.path().join("ex.py");

    j2pc()
        .arg("translate")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "class HelloWorld(Example):\n    pass\n");
}

#[test]
fn translate_emit_tokens() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "ex.j", "class Ex { }");

    j2pc()
        .arg("translate")
        .arg(&input)
        .arg("--emit")
        .arg("tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains("class"));
}

#[test]
fn check_reports_no_diagnostics_for_clean_input() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "ex.j", "class Ex { int x = 1; }");

    j2pc()
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("no diagnostics"));
}

#[test]
fn check_reports_duplicate_variable_diagnostic_in_warning_mode() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "ex.j", "class Ex { int x; int x; }");

    j2pc()
        .arg("check")
        .arg(&input)
        .arg("--no-fatal")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Ex").and(predicate::str::contains('x')));
}

#[test]
fn fatal_parse_error_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "bad.j", "class");

    j2pc().arg("translate").arg(&input).assert().failure();
}

#[test]
fn init_scaffolds_example_and_config() {
    let dir = TempDir::new().unwrap();

    j2pc()
        .arg("init")
        .arg("--path")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("hello.j").exists());
    assert!(dir.path().join("j2pc.toml").exists());
}

#[test]
fn config_file_private_setting_is_honored_without_cli_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "ex.j", "class Ex { private int secret = 1; }");
    let config = write_source(&dir, "j2pc.toml", "fatal = true\nprivate = true\nemit = \"source\"\n");

    j2pc()
        .arg("--config")
        .arg(&config)
        .arg("translate")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("self._secret = 1"));
}
