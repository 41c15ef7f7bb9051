//! Error handling for wrapdb-store
//!
//! Wraps wrapdb-core ExError with store-specific helpers

use wrapdb_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a database error from rusqlite::Error, naming the operation
pub fn sqlite_op(op: &str) -> impl FnOnce(rusqlite::Error) -> ExError + '_ {
    move |err| from_rusqlite(err).with_op(op)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_op_names_operation() {
        let err = sqlite_op("insert_entry")(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("insert_entry"));
    }
}
