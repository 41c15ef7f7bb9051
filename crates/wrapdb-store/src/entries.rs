//! Entry operations
//!
//! Plain functions over a connection, meant to run inside
//! `CachedConnection::invoke`/`invoke_with` so they share its transaction.

use crate::errors::{sqlite_op, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use serde::Serialize;

/// A persisted row of the `entries` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: i64,
    pub value: String,
    /// Unix timestamp (seconds) of the insert
    pub created_at: i64,
}

impl Entry {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            value: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}

/// Insert one value, returning its row id
pub fn insert_entry(conn: &Connection, value: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO entries (value, created_at) VALUES (?1, ?2)",
        rusqlite::params![value, chrono::Utc::now().timestamp()],
    )
    .map_err(sqlite_op("insert_entry"))?;

    Ok(conn.last_insert_rowid())
}

/// Get an entry by row id
pub fn get_entry(conn: &Connection, id: i64) -> Result<Option<Entry>> {
    conn.query_row(
        "SELECT id, value, created_at FROM entries WHERE id = ?1",
        [id],
        Entry::from_row,
    )
    .optional()
    .map_err(sqlite_op("get_entry"))
}

/// List all entries in insertion order
pub fn list_entries(conn: &Connection) -> Result<Vec<Entry>> {
    let mut stmt = conn
        .prepare("SELECT id, value, created_at FROM entries ORDER BY id")
        .map_err(sqlite_op("list_entries"))?;

    let entries = stmt
        .query_map([], Entry::from_row)
        .map_err(sqlite_op("list_entries"))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(sqlite_op("list_entries"))?;

    Ok(entries)
}

pub fn count_entries(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
        .map_err(sqlite_op("count_entries"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{ensure_schema, open_in_memory};

    fn setup() -> Connection {
        let conn = open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_then_get() {
        let conn = setup();
        let id = insert_entry(&conn, "Hello, World0").unwrap();

        let entry = get_entry(&conn, id).unwrap().unwrap();
        assert_eq!(entry.value, "Hello, World0");
        assert!(entry.created_at > 0);
    }

    #[test]
    fn test_get_missing_is_none() {
        let conn = setup();
        assert_eq!(get_entry(&conn, 42).unwrap(), None);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let conn = setup();
        for value in ["b", "a", "c"] {
            insert_entry(&conn, value).unwrap();
        }

        let values: Vec<String> = list_entries(&conn)
            .unwrap()
            .into_iter()
            .map(|e| e.value)
            .collect();
        assert_eq!(values, vec!["b", "a", "c"]);
        assert_eq!(count_entries(&conn).unwrap(), 3);
    }

    #[test]
    fn test_insert_without_schema_fails() {
        let conn = open_in_memory().unwrap();
        let err = insert_entry(&conn, "x").unwrap_err();
        assert_eq!(err.op(), Some("insert_entry"));
        assert!(err.message().contains("no such table"));
    }
}
