//! Pairing files on disk and running them through a processor

use std::io::Write;
use tempfile::NamedTempFile;
use urldiff_compare::JsonComparator;
use urldiff_stream::{Comparison, ComparisonProcessor, Outcome, PairGenerator, StreamError};

fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

fn outcomes(results: Vec<Comparison>) -> Vec<(String, String, Outcome)> {
    results
        .into_iter()
        .map(|c| (c.left, c.right, c.outcome))
        .collect()
}

#[test]
fn test_cross_product_of_json_documents() {
    let a = write_lines(&[r#"{"x": 1}"#, "[1, 2]"]);
    let b = write_lines(&[r#"{ "x": 1.0 }"#, "not json", "[1,2]"]);

    let generator = PairGenerator::new();
    let processor = ComparisonProcessor::new(JsonComparator::new());
    let results: Vec<Comparison> = processor
        .try_run(generator.cross_product(a.path(), b.path()))
        .collect::<Result<_, StreamError>>()
        .unwrap();

    let got: Vec<Outcome> = outcomes(results).into_iter().map(|(_, _, o)| o).collect();
    assert_eq!(
        got,
        vec![
            Outcome::Equal,
            Outcome::Undetermined,
            Outcome::NotEqual,
            Outcome::NotEqual,
            Outcome::Undetermined,
            Outcome::Equal,
        ]
    );
}

#[test]
fn test_zipped_pairs_by_line() {
    let a = write_lines(&["  {}  ", "[]", "1"]);
    let b = write_lines(&["{}", "{}"]);

    let generator = PairGenerator::new();
    let processor = ComparisonProcessor::new(JsonComparator::new());
    let results: Vec<Comparison> = processor
        .try_run(generator.zipped(a.path(), b.path()))
        .collect::<Result<_, StreamError>>()
        .unwrap();

    assert_eq!(
        outcomes(results),
        vec![
            ("{}".to_string(), "{}".to_string(), Outcome::Equal),
            ("[]".to_string(), "{}".to_string(), Outcome::NotEqual),
        ]
    );
}

#[test]
fn test_missing_file_surfaces_as_stream_error() {
    let a = write_lines(&["{}"]);
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let generator = PairGenerator::new();
    let processor = ComparisonProcessor::new(JsonComparator::new());
    let results: Vec<_> = processor
        .try_run(generator.cross_product(a.path(), &missing))
        .collect();

    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(StreamError::Open { .. })));
}

#[test]
fn test_stop_after_first_result() {
    let a = write_lines(&["1", "2", "3"]);
    let b = write_lines(&["1", "2", "3"]);

    let generator = PairGenerator::new();
    let processor = ComparisonProcessor::new(JsonComparator::new());
    let first = processor
        .try_run(generator.cross_product(a.path(), b.path()))
        .next()
        .unwrap()
        .unwrap();

    assert_eq!(first.outcome, Outcome::Equal);
}
