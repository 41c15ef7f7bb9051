//! wrapdb Store - SQLite persistence behind a cached connection handle
//!
//! Provides:
//! - `StoreConfig`: where and how to open the backing store
//! - `CachedConnection`: one lazily opened connection, a commit/rollback
//!   boundary around every operation, and explicit `release`
//! - Entry operations to run through the handle

pub mod config;
pub mod db;
pub mod entries;
pub mod errors;
pub mod handle;

// Re-export key types
pub use config::{ConfigError, DbTarget, StoreConfig};
pub use entries::Entry;
pub use errors::Result;
pub use handle::CachedConnection;
