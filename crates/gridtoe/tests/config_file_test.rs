//! Tests for loading board configuration from disk.

use gridtoe::{BoardConfig, Mark};
use std::io::Write;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "side = 5").unwrap();
    writeln!(file, "starting_mark = \"O\"").unwrap();

    let config = BoardConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.side(), 5);
    assert_eq!(*config.starting_mark(), Mark::O);

    let board = config.build().unwrap();
    assert_eq!(board.side(), 5);
    assert_eq!(board.active_mark(), Mark::O);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = BoardConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_snapshot_serializes() {
    let mut board = BoardConfig::default().build().unwrap();
    board.place_mark(0, 0).unwrap();
    let json = serde_json::to_value(board.snapshot()).unwrap();
    assert_eq!(json["side"], 3);
    assert_eq!(json["active_mark"], "O");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["rows"][0], "X..");
}
