//! Golden Tests for Generated Declarations
//!
//! The default grammar must render byte-for-byte to `fixtures/ast.zig`.

use std::fs;

use astgen::{
    check_output, generate, generate_from_config, write_output, Drift, GeneratorConfig, Grammar,
    RenderProfile,
};

const GOLDEN_ZIG: &str = include_str!("fixtures/ast.zig");

fn default_output() -> astgen::GeneratedOutput {
    generate_from_config(&GeneratorConfig::default()).unwrap()
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_default_grammar_matches_golden() {
    assert_eq!(default_output().code, GOLDEN_ZIG);
}

#[test]
fn test_each_self_reference_is_indirect() {
    let code = default_output().code;
    for line in ["    left: *Expression,", "    right: *Expression,", "    expression: *Expression,"] {
        assert!(code.lines().any(|l| l == line), "missing `{}`", line);
    }
    assert!(code.lines().any(|l| l == "    operator: Token,"));
}

#[test]
fn test_literal_value_is_not_double_wrapped() {
    let code = default_output().code;
    assert!(code.contains("const Literal = struct {\n    value: *Expression,\n};"));
}

#[test]
fn test_empty_schema() {
    let grammar = Grammar::parse("Expression", Vec::<&str>::new()).unwrap();
    let out = generate(&grammar, &RenderProfile::zig());
    assert_eq!(
        out.code,
        "const std = @import(\"std\");\nconst Token = @import(\"scanner.zig\").Token;\npub const Expression = union(enum) {\n};\n"
    );
    assert_eq!(out.type_count, 1);
}

// =============================================================================
// Filesystem
// =============================================================================

#[test]
fn test_write_creates_directory_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested/src");

    let path = write_output(&out_dir, &default_output()).unwrap();

    assert_eq!(path, out_dir.join("ast.zig"));
    assert_eq!(fs::read_to_string(&path).unwrap(), GOLDEN_ZIG);
}

#[test]
fn test_two_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = fs::read(write_output(dir.path(), &default_output()).unwrap()).unwrap();
    let second = fs::read(write_output(dir.path(), &default_output()).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ast.zig"), "stale contents that are longer than nothing\n".repeat(100)).unwrap();

    let path = write_output(dir.path(), &default_output()).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), GOLDEN_ZIG);
}

#[test]
fn test_write_into_a_file_path_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let err = write_output(&blocker, &default_output()).unwrap_err();
    assert!(matches!(err, astgen::GenError::Io { .. }));
}

#[test]
fn test_check_reports_drift() {
    let dir = tempfile::tempdir().unwrap();
    let output = default_output();

    assert!(matches!(check_output(dir.path(), &output).unwrap(), Drift::Missing { .. }));

    write_output(dir.path(), &output).unwrap();
    assert!(check_output(dir.path(), &output).unwrap().is_up_to_date());

    let edited = GOLDEN_ZIG.replace("    operator: Token,\n    right", "    op: Token,\n    right");
    fs::write(dir.path().join("ast.zig"), edited).unwrap();
    match check_output(dir.path(), &output).unwrap() {
        Drift::Changed { diff } => {
            assert!(diff.contains("-    op: Token,"));
            assert!(diff.contains("+    operator: Token,"));
        }
        other => panic!("Expected Changed, got {:?}", other),
    }
}
