//! Restating the declared arity of a function.
//!
//! Two wrappers are provided, both reporting exactly `n` parameters:
//!
//! - [`n_ary`] forwards exactly `n` arguments, padding with
//!   [`Value::Undefined`] and dropping any surplus
//! - [`relabel`] forwards every argument of the call unchanged and only
//!   changes what [`Function::arity`] reports
//!
//! [`fix_arity`] selects between them with an [`ArityMode`]. The per-arity
//! shape is shared through the [`Signature`](crate::value::Signature) cache,
//! so wrapping many functions at the same arity builds the shape once.

use smallvec::SmallVec;

use crate::value::{Function, Value};

/// How [`fix_arity`] forwards arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArityMode {
    /// Forward exactly `n` arguments.
    #[default]
    Truncate,
    /// Forward every argument; only the declared arity changes.
    Relabel,
}

/// Wraps `function` so it declares `n` parameters, forwarding arguments
/// according to `mode`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::{ArityMode, fix_arity};
/// use pointfree::value::{Function, Value};
/// use pointfree::values;
///
/// let count = Function::new(0, |_, arguments| Value::from(arguments.len()));
///
/// let truncated = fix_arity(2, &count, ArityMode::Truncate);
/// assert_eq!(truncated.arity(), 2);
/// assert_eq!(truncated.call(&values![1, 2, 3]), Value::from(2));
///
/// let relabeled = fix_arity(2, &count, ArityMode::Relabel);
/// assert_eq!(relabeled.arity(), 2);
/// assert_eq!(relabeled.call(&values![1, 2, 3]), Value::from(3));
/// ```
pub fn fix_arity(n: usize, function: &Function, mode: ArityMode) -> Function {
    match mode {
        ArityMode::Truncate => n_ary(n, function),
        ArityMode::Relabel => relabel(n, function),
    }
}

/// Wraps `function` so it declares and forwards exactly `n` arguments.
///
/// Missing arguments are forwarded as [`Value::Undefined`]; surplus
/// arguments are dropped. The receiver is forwarded.
///
/// # Examples
///
/// ```
/// use pointfree::compose::n_ary;
/// use pointfree::value::{Function, Value};
/// use pointfree::values;
///
/// let collect = Function::new(0, |_, arguments| Value::list(arguments.iter().cloned()));
/// let binary = n_ary(2, &collect);
///
/// assert_eq!(binary.call(&values![1, 2, 3]), Value::list(values![1, 2]));
/// assert_eq!(binary.call(&values![1]), Value::list([Value::from(1), Value::Undefined]));
/// ```
pub fn n_ary(n: usize, function: &Function) -> Function {
    let target = function.clone();
    Function::derived(function, n, move |receiver, arguments| {
        let forwarded: SmallVec<[Value; 4]> = (0..n)
            .map(|index| arguments.get(index).cloned().unwrap_or_default())
            .collect();
        target.call_with(receiver, &forwarded)
    })
}

/// Wraps `function` so it declares `n` parameters while forwarding every
/// argument and the receiver unchanged.
///
/// Useful to tell [`curry`](crate::compose::curry) how many arguments to
/// wait for when the function itself accepts a variadic list.
pub fn relabel(n: usize, function: &Function) -> Function {
    let target = function.clone();
    Function::derived(function, n, move |receiver, arguments| {
        target.call_with(receiver, arguments)
    })
}
