//! Reference-counted dynamic functions.
//!
//! A [`Function`] pairs a body with a declared [`Signature`]. The declared
//! arity is stated when the function is built (or counted by the
//! [`function!`](crate::function) macro) and is what the combinators in
//! [`crate::compose`] read to decide when enough arguments have arrived.
//!
//! The implicit call receiver of dynamic languages is an explicit
//! `Option<&Value>` parameter of every body.

use std::fmt;
use std::rc::Rc;

use super::{Signature, Value};

/// The shape of a function body: receiver, then positional arguments.
pub type Body = dyn Fn(Option<&Value>, &[Value]) -> Value;

struct FunctionInner {
    name: Option<Rc<str>>,
    signature: Rc<Signature>,
    body: Box<Body>,
}

/// A callable value with a declared arity.
///
/// Cloning a `Function` is cheap and preserves identity: clones compare
/// equal under [`Function::ptr_eq`].
///
/// # Examples
///
/// ```rust
/// use pointfree::value::{Function, Value};
///
/// let add = Function::new(2, |_, arguments| {
///     let left = arguments[0].as_number().unwrap_or(f64::NAN);
///     let right = arguments[1].as_number().unwrap_or(f64::NAN);
///     Value::from(left + right)
/// });
///
/// assert_eq!(add.arity(), 2);
/// assert_eq!(add.call(&[Value::from(1), Value::from(2)]), Value::from(3));
/// ```
#[derive(Clone)]
pub struct Function(Rc<FunctionInner>);

static_assertions::assert_not_impl_any!(Function: Send, Sync);

impl Function {
    /// Creates an anonymous function with the given declared arity.
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(Option<&Value>, &[Value]) -> Value + 'static,
    {
        Self::build(None, Signature::of(arity), Box::new(body))
    }

    /// Creates a named function with the given declared arity.
    pub fn named<F>(name: impl Into<Rc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(Option<&Value>, &[Value]) -> Value + 'static,
    {
        Self::build(Some(name.into()), Signature::of(arity), Box::new(body))
    }

    /// Creates a function that carries the name of `original` but a new
    /// arity and body. Used by the combinators so wrapped functions keep a
    /// recognizable name in debug output.
    pub(crate) fn derived<F>(original: &Self, arity: usize, body: F) -> Self
    where
        F: Fn(Option<&Value>, &[Value]) -> Value + 'static,
    {
        Self::build(original.0.name.clone(), Signature::of(arity), Box::new(body))
    }

    fn build(name: Option<Rc<str>>, signature: Rc<Signature>, body: Box<Body>) -> Self {
        Self(Rc::new(FunctionInner {
            name,
            signature,
            body,
        }))
    }

    /// The declared number of parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.0.signature.arity()
    }

    /// The declared signature.
    #[inline]
    pub fn signature(&self) -> &Rc<Signature> {
        &self.0.signature
    }

    /// The function name, if one was given.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Calls the function without a receiver.
    #[inline]
    pub fn call(&self, arguments: &[Value]) -> Value {
        (self.0.body)(None, arguments)
    }

    /// Calls the function with an optional receiver.
    #[inline]
    pub fn call_with(&self, receiver: Option<&Value>, arguments: &[Value]) -> Value {
        (self.0.body)(receiver, arguments)
    }

    /// Returns `true` when both handles refer to the same function.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "[Function {}{}]",
            self.name().unwrap_or("anonymous"),
            self.0.signature
        )
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}
