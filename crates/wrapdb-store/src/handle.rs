//! Cached connection handle
//!
//! `CachedConnection` owns at most one open connection to the configured
//! store. The connection is opened lazily by the first `invoke`, reused by
//! every later one, and closed only by `release`. Each operation runs in its
//! own transaction: committed when the operation returns `Ok`, rolled back
//! when it returns `Err`.
//!
//! ```no_run
//! use wrapdb_store::entries::insert_entry;
//! use wrapdb_store::{CachedConnection, StoreConfig};
//!
//! # fn main() -> wrapdb_store::Result<()> {
//! let mut handle = CachedConnection::new(StoreConfig::default());
//! handle.invoke_with(insert_entry, "Hello, World0")?;
//! handle.release()?;
//! # Ok(())
//! # }
//! ```

use std::time::Instant;

use rusqlite::{Connection, Transaction};
use wrapdb_core::{log_op_end, log_op_error, log_op_start};
use wrapdb_core_types::schema::{OP_CONNECT, OP_INVOKE, OP_RELEASE};
use wrapdb_core_types::HandleId;

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{from_rusqlite, Result};

#[derive(Debug)]
struct LiveConnection {
    id: HandleId,
    conn: Connection,
}

/// A lazily opened, reusable connection with a transaction per call
///
/// `invoke` and `release` take `&mut self`, so the handle can never be
/// opened twice or closed while an operation is running on it. Share it
/// across threads behind a `Mutex`.
#[derive(Debug)]
pub struct CachedConnection {
    config: StoreConfig,
    live: Option<LiveConnection>,
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

impl CachedConnection {
    /// Create a closed handle; nothing is opened until the first `invoke`
    pub fn new(config: StoreConfig) -> Self {
        Self { config, live: None }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.live.is_some()
    }

    /// Identity of the currently open connection, if any
    pub fn handle_id(&self) -> Option<HandleId> {
        self.live.as_ref().map(|live| live.id)
    }

    /// Run `op` inside a transaction on the cached connection
    ///
    /// Opens the connection first if none is cached. On `Ok` the transaction
    /// is committed and the value returned; on `Err` it is rolled back, the
    /// failure is logged, and the error is returned tagged with the handle
    /// id. The connection stays open either way.
    ///
    /// # Errors
    ///
    /// - `Persistence`/`Io` if the connection cannot be opened (nothing is
    ///   cached, so the next call retries)
    /// - `Persistence` if the transaction cannot begin or commit
    /// - whatever `op` returned
    pub fn invoke<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let started = Instant::now();
        let live = self.connection()?;
        let handle_id = live.id;

        log_op_start!(OP_INVOKE, handle_id = %handle_id);

        let tx = match live.conn.transaction() {
            Ok(tx) => tx,
            Err(e) => {
                let err = from_rusqlite(e).with_op("begin").with_handle_id(handle_id);
                log_op_error!(OP_INVOKE, err, duration_ms = elapsed_ms(started), handle_id = %handle_id);
                return Err(err);
            }
        };

        match op(&tx) {
            Ok(value) => {
                if let Err(e) = tx.commit() {
                    let err = from_rusqlite(e).with_op("commit").with_handle_id(handle_id);
                    log_op_error!(OP_INVOKE, err, duration_ms = elapsed_ms(started), handle_id = %handle_id);
                    return Err(err);
                }
                log_op_end!(OP_INVOKE, duration_ms = elapsed_ms(started), handle_id = %handle_id);
                Ok(value)
            }
            Err(err) => {
                match tx.rollback() {
                    Ok(()) => tracing::warn!(handle_id = %handle_id, "transaction rolled back"),
                    Err(rollback_err) => tracing::warn!(
                        handle_id = %handle_id,
                        error = %rollback_err,
                        "rollback failed"
                    ),
                }
                let err = err.with_handle_id(handle_id);
                log_op_error!(OP_INVOKE, err, duration_ms = elapsed_ms(started), handle_id = %handle_id);
                Err(err)
            }
        }
    }

    /// `invoke` for an operation taking the connection plus one argument
    ///
    /// # Errors
    ///
    /// Same as [`CachedConnection::invoke`].
    pub fn invoke_with<A, T, F>(&mut self, op: F, arg: A) -> Result<T>
    where
        F: FnOnce(&Connection, A) -> Result<T>,
    {
        self.invoke(move |tx| {
            let conn: &Connection = tx;
            op(conn, arg)
        })
    }

    /// Close the cached connection, if any
    ///
    /// Returns `Ok(true)` if a connection was closed, `Ok(false)` if there
    /// was none. The next `invoke` opens a fresh connection.
    ///
    /// # Errors
    ///
    /// `Persistence` if SQLite refuses to close; the connection is then
    /// kept and remains usable.
    pub fn release(&mut self) -> Result<bool> {
        let Some(live) = self.live.take() else {
            tracing::debug!("release with no open connection");
            return Ok(false);
        };

        let started = Instant::now();
        let handle_id = live.id;
        log_op_start!(OP_RELEASE, handle_id = %handle_id);

        match live.conn.close() {
            Ok(()) => {
                log_op_end!(OP_RELEASE, duration_ms = elapsed_ms(started), handle_id = %handle_id);
                Ok(true)
            }
            Err((conn, e)) => {
                self.live = Some(LiveConnection {
                    id: handle_id,
                    conn,
                });
                let err = from_rusqlite(e)
                    .with_op(OP_RELEASE)
                    .with_handle_id(handle_id);
                log_op_error!(OP_RELEASE, err, duration_ms = elapsed_ms(started), handle_id = %handle_id);
                Err(err)
            }
        }
    }

    fn connection(&mut self) -> Result<&mut LiveConnection> {
        let live = match self.live.take() {
            Some(live) => live,
            None => self.connect()?,
        };
        Ok(self.live.insert(live))
    }

    fn connect(&self) -> Result<LiveConnection> {
        let started = Instant::now();
        let db_target = self.config.target();
        log_op_start!(OP_CONNECT, db_target = %db_target);

        match db::open_configured(&self.config) {
            Ok(conn) => {
                let id = HandleId::new();
                log_op_end!(OP_CONNECT, duration_ms = elapsed_ms(started), handle_id = %id, db_target = %db_target);
                Ok(LiveConnection { id, conn })
            }
            Err(err) => {
                log_op_error!(OP_CONNECT, err, duration_ms = elapsed_ms(started), db_target = %db_target);
                Err(err)
            }
        }
    }
}
