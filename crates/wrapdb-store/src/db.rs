//! Database connection management
//!
//! Opens and configures SQLite connections for a `StoreConfig`

use crate::config::{DbTarget, StoreConfig};
use crate::errors::{from_rusqlite, io_error, sqlite_op, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use wrapdb_core::errors::{ExError, ExErrorKind};

const ENTRIES_SCHEMA: &str = include_str!("../sql/entries.sql");

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Apply connection pragmas from `config`
///
/// `journal_mode` is only set for file targets; in-memory databases always
/// report `memory`.
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(sqlite_op("configure"))?;

    // rusqlite panics on timeouts that do not fit in an i32
    let busy_timeout_ms = i32::try_from(config.busy_timeout_ms).map_err(|_| {
        ExError::new(ExErrorKind::Config)
            .with_op("configure")
            .with_message(format!(
                "busy_timeout_ms {} exceeds {}",
                config.busy_timeout_ms,
                i32::MAX
            ))
    })?;
    conn.busy_timeout(Duration::from_millis(busy_timeout_ms as u64))
        .map_err(sqlite_op("configure"))?;

    if let DbTarget::File(_) = config.target() {
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", &config.journal_mode, |row| {
                row.get(0)
            })
            .map_err(sqlite_op("configure"))?;
        tracing::debug!(journal_mode = %mode, "journal mode set");
    }

    Ok(())
}

/// Create the `entries` table if it does not exist
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(ENTRIES_SCHEMA)
        .map_err(sqlite_op("ensure_schema"))
}

/// Open, configure and (optionally) prepare the schema for `config`
///
/// Parent directories of a file target are created as needed.
pub fn open_configured(config: &StoreConfig) -> Result<Connection> {
    let conn = match config.target() {
        DbTarget::Memory => open_in_memory()?,
        DbTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
            open(&path)?
        }
    };

    configure(&conn, config)?;

    if config.ensure_schema {
        ensure_schema(&conn)?;
    }

    Ok(conn)
}
