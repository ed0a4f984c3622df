//! Argument reordering.
//!
//! [`reverse_leading`] reverses a leading window of the argument list and
//! passes the rest through untouched. [`flip`] and [`flip_curry`] build on
//! it to swap the first arguments of a function and curry the result.
//!
//! # Laws
//!
//! - **Flip definition**: `flip(f)(a, b, ..rest) == f(b, a, ..rest)`
//! - **Double flip identity**: `flip(flip(f)) == f` for arity >= 2

use smallvec::SmallVec;

use super::curry_n;
use crate::value::{Function, Value};

/// Options for [`reverse_leading_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReverseOptions {
    /// Consume exactly this many arguments regardless of how many were
    /// supplied. Surplus arguments are dropped and missing ones become
    /// [`Value::Undefined`].
    pub fixed_total: Option<usize>,
    /// Call the wrapped function without the receiver of the outer call.
    pub detach_receiver: bool,
}

/// Reorders `arguments` so the first `min(leading, total)` positions are
/// reversed and the positions after that window keep their order.
pub(crate) fn reorder(arguments: &[Value], leading: usize, total: usize) -> SmallVec<[Value; 4]> {
    let window = leading.min(total);
    (0..total)
        .map(|index| {
            let source = if index < window { window - 1 - index } else { index };
            arguments.get(source).cloned().unwrap_or_default()
        })
        .collect()
}

/// Reverses the first `leading` arguments of every call to `function`.
///
/// The declared arity of the result is the arity of `function`. A window
/// larger than the number of supplied arguments reverses only what was
/// supplied.
///
/// # Examples
///
/// ```
/// use pointfree::compose::reverse_leading;
/// use pointfree::{function, values};
/// use pointfree::value::Value;
///
/// let triple = function!(|a, b, c| Value::list([a, b, c]));
/// let reversed = reverse_leading(&triple, 2);
///
/// assert_eq!(reversed.call(&values![1, 2, 3]), Value::list(values![2, 1, 3]));
/// ```
pub fn reverse_leading(function: &Function, leading: usize) -> Function {
    reverse_leading_with(function, leading, ReverseOptions::default())
}

/// Reverses the first `leading` arguments, with explicit [`ReverseOptions`].
///
/// The declared arity of the result is `options.fixed_total` when given,
/// otherwise the arity of `function`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::{ReverseOptions, reverse_leading_with};
/// use pointfree::value::{Function, Value};
/// use pointfree::values;
///
/// let collect = Function::new(0, |_, arguments| Value::list(arguments.iter().cloned()));
/// let options = ReverseOptions { fixed_total: Some(3), detach_receiver: false };
/// let reversed = reverse_leading_with(&collect, 3, options);
///
/// assert_eq!(reversed.arity(), 3);
/// assert_eq!(
///     reversed.call(&values![1, 2]),
///     Value::list([Value::Undefined, Value::from(2), Value::from(1)]),
/// );
/// ```
pub fn reverse_leading_with(function: &Function, leading: usize, options: ReverseOptions) -> Function {
    let arity = options.fixed_total.unwrap_or_else(|| function.arity());
    let target = function.clone();
    Function::derived(function, arity, move |receiver, arguments| {
        let total = options.fixed_total.unwrap_or(arguments.len());
        let reordered = reorder(arguments, leading, total);
        let receiver = if options.detach_receiver { None } else { receiver };
        target.call_with(receiver, &reordered)
    })
}

/// Swaps the first two arguments of `function` and curries the result at
/// the arity of `function`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::flip;
/// use pointfree::{function, values};
/// use pointfree::value::Value;
///
/// let subtract = function!(|left, right| {
///     left.as_number().zip(right.as_number()).map(|(left, right)| left - right)
/// });
/// let subtract_from = flip(&subtract);
///
/// assert_eq!(subtract_from.call(&values![1, 10]), Value::from(9));
/// let minus_three = subtract_from.call(&values![3]);
/// assert_eq!(minus_three.call(&values![10]), Ok(Value::from(7)));
/// ```
pub fn flip(function: &Function) -> Function {
    curry_n(&reverse_leading(function, 2), function.arity())
}

/// Configuration for [`flip_curry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipCurry {
    /// How many leading arguments to reverse.
    pub reverse: usize,
    /// How many arguments the wrapped function consumes.
    pub total: usize,
    /// How many arguments must arrive before the wrapped function runs.
    pub min: usize,
}

impl FlipCurry {
    /// The common shape: reverse two, consume two, wait for two.
    pub const BINARY: Self = Self {
        reverse: 2,
        total: 2,
        min: 2,
    };
}

/// Turns a data-first utility into a function-first curried one.
///
/// The first `shape.reverse` arguments are reversed, exactly `shape.total`
/// arguments are consumed, and the result is curried at `shape.min`. The
/// wrapped function is always called without a receiver.
///
/// # Examples
///
/// ```
/// use pointfree::compose::{FlipCurry, flip_curry};
/// use pointfree::value::{Function, Value};
/// use pointfree::values;
///
/// // take(list, count)
/// let take = Function::new(2, |_, arguments| {
///     let count = arguments[1].as_number().unwrap_or(0.0) as usize;
///     let items = arguments[0].as_list().unwrap_or_default();
///     Value::list(items.iter().take(count).cloned())
/// });
/// let take_first = flip_curry(&take, FlipCurry::BINARY);
///
/// let take_two = take_first.call(&values![2]);
/// assert_eq!(
///     take_two.call(&[Value::list(values![1, 2, 3])]),
///     Ok(Value::list(values![1, 2])),
/// );
/// ```
pub fn flip_curry(function: &Function, shape: FlipCurry) -> Function {
    let options = ReverseOptions {
        fixed_total: Some(shape.total),
        detach_receiver: true,
    };
    curry_n(&reverse_leading_with(function, shape.reverse, options), shape.min)
}
