use std::io::Write;

use j2p_drv::{translate, Options, TranslateError};
use tempfile::NamedTempFile;

fn write_source(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(text.as_bytes()).expect("write temp file");
    file
}

#[test]
fn translates_a_file_read_from_disk() {
    let file = write_source("public class HelloWorld extends Example { }");
    let source = std::fs::read_to_string(file.path()).unwrap();
    let output = translate(&source, Options::default()).unwrap();
    assert_eq!(output, "class HelloWorld(Example):\n    pass\n");
}

#[test]
fn scenario_b_overloading_end_to_end() {
    let file = write_source(
        "class Ex { int foo() { return 3; } int foo(int x) { return x; } int foo(int z, int y) { return z + y; } }",
    );
    let source = std::fs::read_to_string(file.path()).unwrap();
    let output = translate(&source, Options::default()).unwrap();
    assert!(output.contains("def foo(self, *args):"));
    assert!(output.contains("if len(args) == 0:"));
    assert!(output.contains("(x,) = args"));
    assert!(output.contains("(z, y,) = args"));
}

#[test]
fn scenario_f_main_synthesis_end_to_end() {
    let file = write_source("class App { public static void main() { } }");
    let source = std::fs::read_to_string(file.path()).unwrap();
    let output = translate(&source, Options::default()).unwrap();
    assert!(output.contains("if __name__ == \"__main__\":"));
    assert!(output.contains("if sys.argv[1] == \"App\":"));
    assert!(output.contains("App.main(sys.argv[2:])"));
}

#[test]
fn equals_call_nested_in_a_comparison_is_parenthesized() {
    let file = write_source(
        "class Ex { boolean foo(int a, int b, int c) { return a.equals(b) == c; } }",
    );
    let source = std::fs::read_to_string(file.path()).unwrap();
    let output = translate(&source, Options::default()).unwrap();
    assert!(output.contains("return (a == b) is c"));
}

#[test]
fn duplicate_class_name_is_a_fatal_diagnostic_by_default() {
    let file = write_source("class Ex { } class Ex { }");
    let source = std::fs::read_to_string(file.path()).unwrap();
    let err = translate(&source, Options::default()).unwrap_err();
    assert!(matches!(err, TranslateError::Fatal(_)));
}
