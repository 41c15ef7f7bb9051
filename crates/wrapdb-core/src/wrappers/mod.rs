//! Function wrappers
//!
//! Small single-purpose wrappers around plain functions and closures:
//! - `Memoized` caches results per argument value
//! - `Prefixed` rewrites arguments and result with fixed prefixes

pub mod memo;
pub mod prefix;

pub use memo::{CacheStats, Memoized};
pub use prefix::{CallArgs, Prefixed};
