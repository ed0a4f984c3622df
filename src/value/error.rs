//! Error types for dynamic calls.
//!
//! Under-supplied arguments and receiver mismatches are not errors in this
//! crate: the first produces a further partial application, the second the
//! [`Value::Undefined`](super::Value::Undefined) sentinel. The only failures
//! are genuine misuse, described by [`CallError`].

use thiserror::Error;

/// Represents a misuse of the dynamic calling convention.
///
/// # Examples
///
/// ```rust
/// use pointfree::value::{CallError, Value};
///
/// let error = Value::from(42).call(&[]).unwrap_err();
/// assert_eq!(error, CallError::NotCallable { found: "number" });
/// assert_eq!(error.to_string(), "value of type number is not callable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// A value that is not a function was called.
    #[error("value of type {found} is not callable")]
    NotCallable {
        /// The type name of the value that was called.
        found: &'static str,
    },
    /// An invocation adapter was requested for a slot that holds no function.
    #[error("owner has no method named `{name}`")]
    MissingMethod {
        /// The method name that was looked up.
        name: String,
    },
}
