use egoscan::utils::validation::Validate;
use egoscan::{CliConfig, IdentifierExtractor, LocalDirectory, OutputFormat, ScanError};
use std::fs;
use tempfile::TempDir;

fn dataset(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in files {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

fn scan(dir: &TempDir) -> egoscan::Result<egoscan::ScanResult> {
    let folder = dir.path().to_str().unwrap();
    IdentifierExtractor::new(LocalDirectory::new()).scan(folder)
}

#[test]
fn test_mixed_dataset_folder() {
    let dir = dataset(&["3.edges.csv", "1.edges.csv", "2.nodes.csv"]);
    let result = scan(&dir).unwrap();
    assert_eq!(result.ids, vec![1, 3]);
}

#[test]
fn test_empty_folder() {
    let dir = dataset(&[]);
    let result = scan(&dir).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_numeric_ordering() {
    let dir = dataset(&["10.edges.csv", "2.edges.csv"]);
    let result = scan(&dir).unwrap();
    assert_eq!(result.ids, vec![2, 10]);
}

#[test]
fn test_snap_style_dataset() {
    // Per-ego file families as in the SNAP ego-network archives; only
    // the edges files contribute ids, each exactly once.
    let dir = dataset(&[
        "0.edges", "0.feat", "0.circles", "107.edges", "107.feat", "348.edges",
    ]);
    let result = scan(&dir).unwrap();
    assert_eq!(result.ids, vec![0, 107, 348]);
}

#[test]
fn test_scan_is_idempotent() {
    let dir = dataset(&["5.edges", "1.edges", "9.edges"]);
    let first = scan(&dir).unwrap();
    let second = scan(&dir).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_subdirectories_are_candidates_too() {
    let dir = dataset(&["1.edges"]);
    fs::create_dir(dir.path().join("7.edges.d")).unwrap();
    let result = scan(&dir).unwrap();
    assert_eq!(result.ids, vec![1, 7]);
}

#[test]
fn test_bare_edges_file_fails_with_parse_error() {
    let dir = dataset(&["edges"]);
    let err = scan(&dir).unwrap_err();
    assert!(matches!(err, ScanError::ParseError { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_missing_folder_fails_before_any_listing() {
    let config = CliConfig {
        folder: None,
        format: OutputFormat::Plain,
        verbose: false,
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ScanError::ConfigError { .. }));
    assert_eq!(err.user_friendly_message(), "No folder is specified.");
}

#[test]
fn test_nonexistent_folder_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = IdentifierExtractor::new(LocalDirectory::new())
        .scan(missing.to_str().unwrap())
        .unwrap_err();
    assert!(matches!(err, ScanError::IoError(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_json_serialization_of_result() {
    let dir = dataset(&["2.edges", "1.edges"]);
    let result = scan(&dir).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"ids":[1,2]}"#);
}
