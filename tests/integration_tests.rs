//! Integration tests for the end-to-end checking pipeline.
//!
//! These tests run source text through tokenization, parsing and semantic
//! checking via the library, and drive the `exprc` binary on files.

use std::{fs, path::PathBuf, process::Command, rc::Rc};

use tempfile::{tempdir, TempDir};

use exprc::{
    ast::{
        ast::Stmt,
        types::{BOOL_TYPE, INT_TYPE, STRING_TYPE},
    },
    check_source,
    errors::diagnostics::{CallbackSink, Diagnostics},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::{check_program, Checker},
};

const VALID_PROGRAM: &str = "\
// running totals
const limit = 10;
var count int;
var name = \"exprc\";
count = count + 1;
print count < limit && name == \"exprc\";
print -count * 2;
";

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_check_valid_program() {
    let (program, diagnostics) = check_source(VALID_PROGRAM, "valid.expr").unwrap();

    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
    assert_eq!(program.statements.len(), 6);

    match &program.statements[4] {
        Stmt::Print(print) => assert_eq!(print.expr.check_type(), Some(&BOOL_TYPE)),
        other => panic!("Expected print statement, got {:?}", other),
    }
    match &program.statements[5] {
        Stmt::Print(print) => assert_eq!(print.expr.check_type(), Some(&INT_TYPE)),
        other => panic!("Expected print statement, got {:?}", other),
    }
}

#[test]
fn test_check_reports_every_error_in_order() {
    let source = "\
var a int;
var b float;
var d int = a + b;
var e int = b + 4.5;
print \"Hello\" * \"World\";
const x = 1;
x = 2;
var a float;
y = 1;
";
    let (_, diagnostics) = check_source(source, "errors.expr").unwrap();

    let reported: Vec<(u32, &str)> = diagnostics
        .iter()
        .map(|diagnostic| (diagnostic.line, diagnostic.message.as_str()))
        .collect();

    assert_eq!(
        reported,
        vec![
            (3, "Binary operator + does not have matching LHS/RHS types"),
            (4, "Cannot assign float to int"),
            (5, "Binary operator * not supported on RHS of expression"),
            (7, "Cannot assign to constant x"),
            (8, "Attempted to redefine var 'a', not allowed"),
            (9, "name 'y' not defined"),
        ]
    );
}

#[test]
fn test_checker_returns_symbol_table() {
    let tokens = tokenize(VALID_PROGRAM.to_string(), Some("valid.expr".to_string())).unwrap();
    let mut program = parse(tokens, Rc::new("valid.expr".to_string())).unwrap();

    let mut diagnostics = Diagnostics::new();
    let symtab = Checker::new(&mut diagnostics).check(&mut program);

    assert!(diagnostics.is_empty());
    assert_eq!(symtab.len(), 7);
    assert_eq!(symtab.lookup("name").and_then(|s| s.check_type()), Some(&STRING_TYPE));
    assert_eq!(symtab.lookup("count").and_then(|s| s.check_type()), Some(&INT_TYPE));
}

#[test]
fn test_callback_sink_streams_diagnostics() {
    let tokens = tokenize("print missing;\nprint int;".to_string(), None).unwrap();
    let mut program = parse(tokens, Rc::new("<stdin>".to_string())).unwrap();

    let mut lines = vec![];
    let mut sink = CallbackSink(|line: u32, _message: &str| lines.push(line));
    check_program(&mut program, &mut sink);

    assert_eq!(lines, vec![1, 2]);
}

#[test]
fn test_front_end_errors_are_returned() {
    let error = check_source("var x int = 1 +;", "bad.expr").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");

    let error = check_source("var x int = @;", "bad.expr").unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_binary_check_clean_file() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, "clean.expr", VALID_PROGRAM);

    let output = Command::new(env!("CARGO_BIN_EXE_exprc"))
        .args(["check", path.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let root = dir.path().to_path_buf();
    dir.close().unwrap();
    assert!(!root.exists());
}

#[test]
fn test_binary_reports_diagnostics() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, "dirty.expr", "var s string;\ns = 1;\nprint int;\n");

    let output = Command::new(env!("CARGO_BIN_EXE_exprc"))
        .args(["check", path.to_str().unwrap()])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout,
        "dirty.expr:2: Cannot assign int to string\n\
         dirty.expr:3: cannot use int outside of variable declarations\n\
         2 error(s) found\n"
    );
}

#[test]
fn test_binary_quiet_prints_only_summary() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, "quiet.expr", "print 1 + \"a\";\n");

    let output = Command::new(env!("CARGO_BIN_EXE_exprc"))
        .args(["check", "--quiet", path.to_str().unwrap()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1 error(s) found\n");
}

#[test]
fn test_binary_parse_error_exit_code() {
    let dir = tempdir().unwrap();
    let path = write_source(&dir, "broken.expr", "var a int\nprint a;\n");

    let output = Command::new(env!("CARGO_BIN_EXE_exprc"))
        .args(["check", path.to_str().unwrap()])
        .output()
        .unwrap();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error: UnexpectedToken"));
    assert!(stderr.contains("-> broken.expr:2"));
}

#[test]
fn test_binary_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_exprc"))
        .args(["check", "/nonexistent/exprc/missing.expr"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr).unwrap().contains("failed to read"));
}
