//! Tests for error types and I/O error mapping

use evolog::{read_log_file, Error, RecordKind};

#[test]
fn test_format_error_names_kind_and_line() {
    let err = evolog::reader::parse_str("INFO - Run: not-a-number\n").unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("malformed Run record"));
    assert!(message.contains("INFO - Run: not-a-number"));
    assert!(matches!(
        err,
        Error::Format {
            kind: RecordKind::RunStart,
            ..
        }
    ));
}

#[test]
fn test_config_error_carries_json_reason() {
    let err = evolog::reader::parse_str("INFO - Config: {oops\n").unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("malformed Config record"));
    assert!(message.contains("invalid config JSON"));
}

#[test]
fn test_literal_error_reason_surfaces() {
    let err = evolog::reader::parse_str("INFO - Best Individual: [1, 2,]\n").unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("malformed Best Individual record"));
    assert!(message.contains("unexpected character"));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such.log");

    let err = read_log_file(&path).unwrap_err();
    match &err {
        Error::NotFound { path: reported } => assert_eq!(reported, &path),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(format!("{err}").contains("no-such.log"));
}

#[test]
fn test_directory_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_log_file(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_read_log_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sat-3.log");
    std::fs::write(
        &path,
        "INFO - Problem: SAT-3\n\
         INFO - Run: 1\n\
         INFO - End Run: 1\n",
    )
    .unwrap();

    let log = read_log_file(&path).unwrap();
    assert_eq!(log.name(), "SAT-3");
    assert_eq!(log.runs().len(), 1);
}
