//! Elementary combinators as dynamic functions.
//!
//! - [`identity`]: returns its first argument (I combinator)
//! - [`constant`]: ignores its arguments and returns a fixed value
//!   (K combinator)
//!
//! Both are ordinary [`Function`] values, so they can be curried, flipped
//! or limited like any other function.

use crate::value::{Function, Value};

/// Returns a function of arity 1 that returns its first argument unchanged.
///
/// # Examples
///
/// ```
/// use pointfree::compose::identity;
/// use pointfree::value::Value;
/// use pointfree::values;
///
/// let id = identity();
/// assert_eq!(id.call(&values![42]), Value::from(42));
/// assert_eq!(id.call(&[]), Value::Undefined);
/// ```
pub fn identity() -> Function {
    Function::named("identity", 1, |_, arguments| {
        arguments.first().cloned().unwrap_or_default()
    })
}

/// Returns a function of arity 0 that always returns `value`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::constant;
/// use pointfree::value::Value;
/// use pointfree::values;
///
/// let always_five = constant(5);
/// assert_eq!(always_five.call(&[]), Value::from(5));
/// assert_eq!(always_five.call(&values!["ignored"]), Value::from(5));
/// ```
pub fn constant(value: impl Into<Value>) -> Function {
    let value = value.into();
    Function::named("constant", 0, move |_, _| value.clone())
}
