//! Tests for the RealFileSystem boundary implementation

use privtax::infrastructure::traits::{FileSystem, RealFileSystem};
use std::fs;
use tempfile::TempDir;

#[test]
fn given_content_when_write_then_read_back_unchanged() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("names.txt");
    let fs = RealFileSystem;

    // Act
    fs.write(&path, "1. 位置信息\n").unwrap();

    // Assert
    assert!(fs.exists(&path));
    assert_eq!(fs.read_to_string(&path).unwrap(), "1. 位置信息\n");
}

#[test]
fn given_existing_file_when_write_then_replaces_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.json");
    fs::write(&path, "old content that is longer").unwrap();

    RealFileSystem.write(&path, "{}").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn given_missing_file_when_read_then_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.json");

    let err = RealFileSystem.read_to_string(&path).unwrap_err();

    assert!(!RealFileSystem.exists(&path));
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
