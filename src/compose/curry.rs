//! The currying engine.
//!
//! [`curry_n`] turns a function into one that accumulates arguments across
//! any number of calls, each supplying zero or more arguments, and invokes
//! the underlying function exactly once when the accumulated count reaches
//! the target arity.
//!
//! # Design Decisions
//!
//! Every partial application is a fresh [`Function`] that owns an immutable,
//! shared snapshot of the arguments accumulated so far. Extending a chain
//! copies that snapshot, so independent chains started from the same
//! curried function (or from the same partial application) never observe
//! each other's arguments.
//!
//! Only the receiver of the call that completes a chain is forwarded to the
//! underlying function; receivers of earlier partial calls are discarded.
//!
//! # Laws
//!
//! For `f` of arity `n` and any split of `a1..an` into ordered groups:
//!
//! ```text
//! curry(f)(g1)(g2)...(gm) == f(a1, ..., an)
//! curry(f)() == curry(f)
//! ```

use std::rc::Rc;

use smallvec::SmallVec;

use crate::value::{Function, Value};

/// Curries `function` at its declared arity.
///
/// # Examples
///
/// ```
/// use pointfree::compose::curry;
/// use pointfree::{function, values};
/// use pointfree::value::Value;
///
/// let add = function!(|a, b| a.as_number().unwrap_or(0.0) + b.as_number().unwrap_or(0.0));
/// let curried = curry(&add);
///
/// let add_one = curried.call(&values![1]);
/// assert_eq!(add_one.call(&values![2]), Ok(Value::from(3)));
/// assert_eq!(curried.call(&values![1, 2]), Value::from(3));
///
/// // A zero-argument call before the threshold is a no-op step.
/// let same = curried.call(&[]);
/// assert_eq!(same.call(&values![1])?.call(&values![2]), Ok(Value::from(3)));
/// # Ok::<(), pointfree::value::CallError>(())
/// ```
pub fn curry(function: &Function) -> Function {
    curry_n(function, function.arity())
}

/// Curries `function` at an explicit `arity`.
///
/// Calling the result with at least `arity` arguments invokes `function`
/// immediately with all of them, surplus included. Calling it with fewer
/// returns a [`Value::Function`] that waits for the rest. The returned
/// functions declare the number of arguments still missing.
///
/// # Examples
///
/// ```
/// use pointfree::compose::curry_n;
/// use pointfree::value::{Function, Value};
/// use pointfree::values;
///
/// let collect = Function::new(0, |_, arguments| Value::list(arguments.iter().cloned()));
/// let three = curry_n(&collect, 3);
/// assert_eq!(three.arity(), 3);
///
/// let waiting = three.call(&values![1]);
/// assert_eq!(waiting.as_function().map(Function::arity), Some(2));
/// assert_eq!(
///     waiting.call(&values![2, 3, 4]),
///     Ok(Value::list(values![1, 2, 3, 4])),
/// );
/// ```
pub fn curry_n(function: &Function, arity: usize) -> Function {
    accumulate(function.clone(), arity, Rc::from([]))
}

fn accumulate(function: Function, arity: usize, supplied: Rc<[Value]>) -> Function {
    let remaining = arity.saturating_sub(supplied.len());
    let name_source = function.clone();
    Function::derived(&name_source, remaining, move |receiver, arguments| {
        if supplied.is_empty() && arguments.len() >= arity {
            return complete(&function, arity, receiver, arguments);
        }
        let mut collected: SmallVec<[Value; 4]> = SmallVec::with_capacity(supplied.len() + arguments.len());
        collected.extend(supplied.iter().cloned());
        collected.extend(arguments.iter().cloned());
        if collected.len() >= arity {
            complete(&function, arity, receiver, &collected)
        } else {
            Value::Function(accumulate(function.clone(), arity, Rc::from(collected.as_slice())))
        }
    })
}

fn complete(function: &Function, arity: usize, receiver: Option<&Value>, arguments: &[Value]) -> Value {
    tracing::trace!(
        function = function.name().unwrap_or("anonymous"),
        arity,
        supplied = arguments.len(),
        "curried application complete"
    );
    function.call_with(receiver, arguments)
}
