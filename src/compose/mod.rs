//! Point-free combinators over dynamic functions.
//!
//! This module provides the machinery that lets functions be partially
//! applied, reordered and adapted without the caller managing arity or
//! argument order by hand.
//!
//! # Overview
//!
//! - [`curry`] / [`curry_n`]: accumulate arguments across calls until the
//!   target arity is reached
//! - [`fix_arity`], [`n_ary`], [`relabel`]: restate the declared arity of
//!   a function, truncating or forwarding its arguments
//! - [`reverse_leading`] / [`reverse_leading_with`]: reverse a leading
//!   window of the argument list
//! - [`limit_args`]: forward only the first `k` arguments
//! - [`invoke`] / [`invoke_n`]: adapt a method into a curried function
//!   whose last argument is the receiver
//!
//! # Helper Functions
//!
//! - [`flip`]: swap the first two arguments and curry
//! - [`flip_curry`]: reverse, fix the consumed count, and curry in one step
//! - [`identity`], [`constant`]: the I and K combinators
//!
//! # Macros
//!
//! - [`function!`](crate::function): build a [`Function`](crate::value::Function)
//!   whose arity is counted from its parameter list
//! - [`values!`](crate::values): build an argument array
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use pointfree::compose::curry;
//! use pointfree::{function, values};
//! use pointfree::value::Value;
//!
//! let volume = function!(|width, height, depth| {
//!     [width, height, depth].iter().filter_map(Value::as_number).product::<f64>()
//! });
//! let curried = curry(&volume);
//!
//! let base = curried.call(&values![2, 3]);
//! assert_eq!(base.call(&values![4]), Ok(Value::from(24)));
//! ```
//!
//! ## Methods as free functions
//!
//! ```
//! # #[cfg(feature = "natives")]
//! # {
//! use pointfree::compose::invoke;
//! use pointfree::natives::Prototypes;
//! use pointfree::values;
//!
//! let prototypes = Prototypes::standard();
//! let slice = invoke("slice", prototypes.list_prototype()).unwrap();
//!
//! let numbers = prototypes.list(values![10, 20, 30, 40]);
//! let sliced = slice.call(&[1.into(), 3.into(), numbers]);
//! assert_eq!(sliced.unboxed(), &pointfree::value::Value::list(values![20, 30]));
//! # }
//! ```
//!
//! # Laws
//!
//! - **Partition**: `curry(f)(g1)...(gm) == f(a1, ..., an)` for every split
//!   of `a1..an` into ordered groups
//! - **Empty step**: `curry(f)()` behaves as `curry(f)`
//! - **Flip definition**: `flip(f)(a, b) == f(b, a)`

mod arity;
mod curry;
mod function_macro;
mod invoke;
mod limit;
mod reverse;
mod utils;

pub use arity::{ArityMode, fix_arity, n_ary, relabel};
pub use curry::{curry, curry_n};
pub use invoke::{invoke, invoke_n};
pub use limit::limit_args;
pub use reverse::{FlipCurry, ReverseOptions, flip, flip_curry, reverse_leading, reverse_leading_with};
pub use utils::{constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::function;
pub use crate::values;
