//! # pointfree
//!
//! Currying, arity control and method-invocation adapters for dynamically
//! typed function values.
//!
//! ## Overview
//!
//! This library lets functions be partially applied, reordered and composed
//! without the caller managing arity or argument order by hand. It includes:
//!
//! - **Values**: a dynamic [`Value`](value::Value) type, [`Function`](value::Function)s
//!   with a declared arity, and [`Object`](value::Object)s with prototype chains
//! - **Combinators**: `curry`, `fix_arity`, `reverse_leading`, `limit_args`
//!   and `invoke`, plus `flip` and friends built on them
//! - **Natives**: list and text prototypes whose methods can be adapted
//!   into curried free functions
//!
//! ## Feature Flags
//!
//! - `natives` (default): the native list and text prototypes
//!
//! ## Logging
//!
//! The library emits [`tracing`] events and never installs a subscriber:
//! `trace` for signature construction and completed curried applications,
//! `debug` when an invocation adapter refuses a receiver.
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//! use pointfree::{function, values};
//!
//! let add = curry(&function!(|a, b| {
//!     a.as_number().unwrap_or(0.0) + b.as_number().unwrap_or(0.0)
//! }));
//!
//! let increment = add.call(&values![1]);
//! assert_eq!(increment.call(&values![41]), Ok(Value::from(42)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;

    pub use crate::value::{CallError, Function, Object, Value};

    #[cfg(feature = "natives")]
    pub use crate::natives::Prototypes;
}

pub mod compose;

pub mod value;

#[cfg(feature = "natives")]
pub mod natives;
