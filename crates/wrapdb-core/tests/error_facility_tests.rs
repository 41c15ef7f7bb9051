use wrapdb_core::errors::{ExError, ExErrorKind};
use wrapdb_core_types::HandleId;

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::ConstraintViolation, "ERR_CONSTRAINT_VIOLATION"),
        (ExErrorKind::Config, "ERR_CONFIG"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_builder_populates_context() {
    let handle_id = HandleId::new();
    let err = ExError::new(ExErrorKind::Persistence)
        .with_op("commit")
        .with_handle_id(handle_id)
        .with_message("database is locked");

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(err.code(), "ERR_PERSISTENCE");
    assert_eq!(err.op(), Some("commit"));
    assert_eq!(err.handle_id(), Some(handle_id));
    assert_eq!(err.message(), "database is locked");
    assert!(err.to_string().contains(&handle_id.to_string()));
}

#[test]
fn test_no_context_by_default() {
    let err = ExError::new(ExErrorKind::Internal);
    assert_eq!(err.op(), None);
    assert_eq!(err.handle_id(), None);
    assert_eq!(err.message(), "");
}

#[test]
fn test_boxes_as_std_error() {
    let boxed: Box<dyn std::error::Error> = ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message("bad value")
        .into();
    assert_eq!(
        boxed.to_string(),
        "[ERR_CONFIG] in operation 'load_config': bad value"
    );
}
