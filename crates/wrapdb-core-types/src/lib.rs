//! Core types shared across wrapdb facilities
//!
//! This crate provides foundational types used by the error, logging and
//! store layers:
//!
//! - **Identity types**: HandleId, tagging each opened connection
//! - **Schema constants**: Canonical field keys and event names

pub mod identity;
pub mod schema;

pub use identity::HandleId;
