//! Integration tests for the Cooke front end
//!
//! Every `tests/fixtures/valid/*.ck` program must validate. Every `tests/fixtures/invalid/*.ck` program must
//! produce exactly the diagnostics recorded in the sibling `.stderr` file.

use std::fs;
use std::path::{Path, PathBuf};

use cooke::parser;

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "ck").unwrap_or(false))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures found in {}", dir.display());
    paths
}

/// Run the grammar engine and render diagnostics the way the CLI streams them.
fn diagnostics(path: &Path) -> String {
    let source = fs::read_to_string(path).unwrap();
    match parser::parse(&source) {
        Ok(()) => String::new(),
        Err(errors) => errors.iter().map(|e| format!("{}\n", e)).collect(),
    }
}

#[test]
fn test_valid_fixtures() {
    for path in fixtures("valid") {
        let output = diagnostics(&path);
        assert!(
            output.is_empty(),
            "Expected {} to validate, got:\n{}",
            path.display(),
            output
        );
    }
}

#[test]
fn test_invalid_fixtures() {
    for path in fixtures("invalid") {
        let expected = fs::read_to_string(path.with_extension("stderr")).unwrap();
        assert_eq!(diagnostics(&path), expected, "diagnostics for {}", path.display());
    }
}

#[test]
fn test_fixture_sources_roundtrip_through_reader() {
    for path in fixtures("valid") {
        let file = fs::File::open(&path).unwrap();
        let source = cooke::source::read_source(file).unwrap();
        assert_eq!(source, fs::read_to_string(&path).unwrap());
    }
}
