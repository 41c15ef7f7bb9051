//! Identity of a live connection handle
//!
//! Every connection opened by a cached handle gets a fresh `HandleId`, so
//! callers (and logs) can tell whether two operations ran on the same
//! connection or on a recreated one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one opened connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleId(Uuid);

impl HandleId {
    /// Generate a new random HandleId (UUIDv4)
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HandleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HandleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_ids_are_unique() {
        let a = HandleId::new();
        let b = HandleId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_handle_id_serde_transparent_uuid() {
        let id = HandleId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: HandleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
