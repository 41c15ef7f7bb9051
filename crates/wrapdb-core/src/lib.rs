//! wrapdb Core - error facility, logging facility and function wrappers
//!
//! This crate provides:
//! - The canonical structured error (`ExError`) and its kind taxonomy
//! - Structured logging initialisation, op macros and test capture
//! - `Memoized`: result caching around a pure function
//! - `Prefixed`: argument/result prefixing around a string function

pub mod errors;
pub mod logging_facility;
pub mod wrappers;

// Macros resolve schema constants through this path
pub use wrapdb_core_types::schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result};
pub use wrappers::{CacheStats, CallArgs, Memoized, Prefixed};
