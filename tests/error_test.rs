//! Tests for error types

use std::path::PathBuf;

use student_db::Error;

#[test]
fn test_duplicate_id_error() {
    let error = Error::DuplicateId(101);
    let error_str = format!("{error}");
    assert!(error_str.contains("Student ID must be unique"));
    assert!(error_str.contains("101"));
}

#[test]
fn test_not_found_error() {
    let error = Error::NotFound(7);
    let error_str = format!("{error}");
    assert!(error_str.contains("Student not found"));
    assert!(error_str.contains('7'));
}

#[test]
fn test_invalid_age_error() {
    let error = Error::InvalidAge("-5".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Age must be a valid number"));
    assert!(error_str.contains("-5"));
}

#[test]
fn test_empty_subjects_error() {
    let error = Error::EmptySubjects;
    assert_eq!(format!("{error}"), "At least one subject is required");
}

#[test]
fn test_invalid_menu_choice_error() {
    let error = Error::InvalidMenuChoice("x".to_string());
    assert_eq!(format!("{error}"), "Invalid choice 'x'");
}

#[test]
fn test_codec_error_names_file() {
    let error = Error::Codec {
        path: PathBuf::from("students.txt"),
        message: "expected value at line 1 column 1".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Malformed data file students.txt"));
    assert!(error_str.contains("line 1 column 1"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
    assert!(error_str.contains("read-only"));
}

#[test]
fn test_error_debug() {
    let error = Error::EmptyName;
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("EmptyName"));
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> student_db::Result<i64> {
        Err(Error::NotFound(1))
    }

    assert!(returns_error().is_err());
}
