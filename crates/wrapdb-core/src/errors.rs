//! Canonical error facility
//!
//! `ExError` is the one error type surfaced by the store and the CLI:
//! a stable kind/code plus optional operation and handle context.

use wrapdb_core_types::HandleId;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    ConstraintViolation,

    // Setup
    Config,

    // Integration/IO
    Io,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus
/// optional context for debugging: the operation that failed and the
/// handle it ran on.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    handle_id: Option<HandleId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            handle_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add handle context
    pub fn with_handle_id(mut self, handle_id: HandleId) -> Self {
        self.handle_id = Some(handle_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the handle context, if any
    pub fn handle_id(&self) -> Option<HandleId> {
        self.handle_id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(handle_id) = &self.handle_id {
            write!(f, " (handle_id: {})", handle_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("insert_entry")
            .with_message("disk I/O error");

        let s = err.to_string();
        assert!(s.starts_with("[ERR_PERSISTENCE]"));
        assert!(s.contains("in operation 'insert_entry'"));
        assert!(s.ends_with(": disk I/O error"));
    }

    #[test]
    fn test_display_without_context() {
        let err = ExError::new(ExErrorKind::Internal);
        assert_eq!(err.to_string(), "[ERR_INTERNAL]");
    }
}
