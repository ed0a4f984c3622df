//! Limiting how many arguments reach a callback.
//!
//! Iteration helpers commonly call their callback with auxiliary positional
//! data (an index, the whole collection). [`limit_args`] adapts a callback
//! so it only ever sees the leading arguments it cares about.

use crate::value::{Function, Value};

/// Wraps `function` so it receives at most the first `limit` arguments.
///
/// Fewer arguments are forwarded as supplied, without padding. A `None`
/// limit returns `function` unchanged. The wrapper declares `limit`
/// parameters and never forwards the receiver.
///
/// # Examples
///
/// ```
/// use pointfree::compose::limit_args;
/// use pointfree::value::{Function, Value};
/// use pointfree::values;
///
/// let count = Function::new(1, |_, arguments| Value::from(arguments.len()));
///
/// let unary = limit_args(&count, Some(1));
/// assert_eq!(unary.call(&values!["item", 0, "collection"]), Value::from(1));
/// assert_eq!(unary.call(&[]), Value::from(0));
///
/// let unchanged = limit_args(&count, None);
/// assert!(unchanged.ptr_eq(&count));
/// ```
pub fn limit_args(function: &Function, limit: Option<usize>) -> Function {
    let Some(limit) = limit else {
        return function.clone();
    };
    let target = function.clone();
    Function::derived(function, limit, move |_receiver, arguments: &[Value]| {
        target.call(&arguments[..limit.min(arguments.len())])
    })
}
