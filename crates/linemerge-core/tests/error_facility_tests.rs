use linemerge_core::errors::{ExError, ExErrorKind, LineMergeError};
use linemerge_core::MergeStrategy;

#[test]
fn test_unknown_strategy_maps_to_invalid_strategy() {
    let err = "ours".parse::<MergeStrategy>().unwrap_err();
    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidStrategy);
    assert_eq!(ex_err.code(), "ERR_INVALID_STRATEGY");
    assert_eq!(ex_err.op(), Some("parse_strategy"));
    assert!(ex_err.message().contains("ours"));
}

#[test]
fn test_unreadable_source_carries_path() {
    let err = LineMergeError::SourceUnreadable {
        path: "missing.txt".to_string(),
        reason: "No such file or directory".to_string(),
    };
    assert!(err.to_string().contains("missing.txt"));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.path(), Some("missing.txt"));
    assert_eq!(ex_err.op(), Some("read_source"));
}

#[test]
fn test_export_failure_distinct_op_from_read() {
    let ex_err: ExError = LineMergeError::ExportFailed {
        path: "/nope/merged.txt".to_string(),
        reason: "Permission denied".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert_eq!(ex_err.op(), Some("export"));
}

#[test]
fn test_stdin_twice_is_invalid_input() {
    let ex_err: ExError = LineMergeError::StdinUsedTwice.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
}

#[test]
fn test_serde_json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: LineMergeError = json_err.into();
    assert!(matches!(err, LineMergeError::Serialization { .. }));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvalidStrategy, "ERR_INVALID_STRATEGY"),
        (ExErrorKind::InvalidFormat, "ERR_INVALID_FORMAT"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
