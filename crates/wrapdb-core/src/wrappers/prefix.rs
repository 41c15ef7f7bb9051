//! Argument and result prefixing
//!
//! `Prefixed` rewrites every argument of a call with `arg_prefix` before
//! handing it to the wrapped function, then prefixes the function's
//! rendered result with `res_prefix`.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Arguments of a prefixed call: positional values plus named values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallArgs {
    pub positional: Vec<String>,
    pub named: BTreeMap<String, String>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument
    pub fn named(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    fn with_prefix(self, prefix: &str) -> Self {
        Self {
            positional: self
                .positional
                .into_iter()
                .map(|value| format!("{prefix}{value}"))
                .collect(),
            named: self
                .named
                .into_iter()
                .map(|(key, value)| (key, format!("{prefix}{value}")))
                .collect(),
        }
    }
}

/// A function wrapped with argument and result prefixes
///
/// # Example
///
/// ```
/// use wrapdb_core::{CallArgs, Prefixed};
///
/// let greet = Prefixed::new("arg:", "res:", |args: CallArgs| {
///     format!("hello {}", args.positional[0])
/// });
/// assert_eq!(greet.call(CallArgs::new().arg("alice")), "res:hello arg:alice");
/// ```
pub struct Prefixed<F> {
    arg_prefix: String,
    res_prefix: String,
    func: F,
}

impl<F> Prefixed<F> {
    pub fn new(arg_prefix: impl Into<String>, res_prefix: impl Into<String>, func: F) -> Self {
        Self {
            arg_prefix: arg_prefix.into(),
            res_prefix: res_prefix.into(),
            func,
        }
    }

    pub fn arg_prefix(&self) -> &str {
        &self.arg_prefix
    }

    pub fn res_prefix(&self) -> &str {
        &self.res_prefix
    }

    /// Call the wrapped function with prefixed arguments
    pub fn call<D>(&self, args: CallArgs) -> String
    where
        F: Fn(CallArgs) -> D,
        D: Display,
    {
        let modified = args.with_prefix(&self.arg_prefix);
        tracing::debug!(
            arg_prefix = %self.arg_prefix,
            positional = ?modified.positional,
            named = ?modified.named,
            "prefixed call arguments"
        );
        let result = (self.func)(modified);
        format!("{}{}", self.res_prefix, result)
    }
}
