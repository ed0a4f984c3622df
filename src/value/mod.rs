//! Dynamic host values.
//!
//! The combinators in [`crate::compose`] transform functions over a single
//! dynamic value type, [`Value`], so that arguments of any shape can be
//! accumulated, reordered and forwarded without the caller managing arity.
//!
//! - [`Value`]: scalars, text, lists, objects and functions
//! - [`Function`]: a callable with a declared arity
//! - [`Object`]: named slots with a prototype chain
//! - [`Signature`]: the cached declared shape of a function
//! - [`CallError`]: misuse of the calling convention
//!
//! # Examples
//!
//! ```rust
//! use pointfree::{function, values};
//! use pointfree::value::Value;
//!
//! let pair = function!(|left, right| Value::list([left, right]));
//! assert_eq!(pair.arity(), 2);
//! assert_eq!(
//!     pair.call(&values![1, "two"]),
//!     Value::list(values![1, "two"]),
//! );
//! ```

mod error;
mod function;
mod object;
mod signature;

use std::fmt;
use std::rc::Rc;

pub use error::CallError;
pub use function::{Body, Function};
pub use object::Object;
pub use signature::Signature;

/// A dynamically typed value.
///
/// Equality is strict: scalars and text compare by value, lists compare
/// element-wise, and objects and functions compare by identity.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value. Also the "no result" sentinel.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// An immutable string.
    Text(Rc<str>),
    /// An immutable list.
    List(Rc<[Self]>),
    /// A shared object.
    Object(Object),
    /// A function.
    Function(Function),
}

impl Value {
    /// Builds a list value.
    pub fn list(items: impl IntoIterator<Item = Self>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// The name of this value's type, as reported in errors.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for [`Value::Undefined`] and [`Value::Null`].
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// The number, if this is one.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The text, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The list items, if this is a list.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The object, if this is one.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The function, if this is one.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the primitive boxed inside an object, or the value itself.
    pub fn unboxed(&self) -> &Self {
        match self {
            Self::Object(object) => object.payload().unwrap_or(self),
            _ => self,
        }
    }

    /// Reads the function currently installed under `name`.
    ///
    /// Only objects have slots; any other value, or a slot holding a
    /// non-function, yields `None`.
    pub fn method(&self, name: &str) -> Option<Function> {
        match self.as_object()?.get(name)? {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Calls this value without a receiver.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::NotCallable`] when this value is not a function.
    pub fn call(&self, arguments: &[Self]) -> Result<Self, CallError> {
        self.call_with(None, arguments)
    }

    /// Calls this value with an optional receiver.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::NotCallable`] when this value is not a function.
    pub fn call_with(&self, receiver: Option<&Self>, arguments: &[Self]) -> Result<Self, CallError> {
        match self {
            Self::Function(function) => Ok(function.call_with(receiver, arguments)),
            other => Err(CallError::NotCallable {
                found: other.type_name(),
            }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left.ptr_eq(right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

/// Formats a number the way the host prints it: integral values carry no
/// fractional part.
#[allow(clippy::cast_possible_truncation)]
fn write_number(formatter: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number.fract() == 0.0 && number.abs() < 1e15 {
        write!(formatter, "{}", number as i64)
    } else {
        write!(formatter, "{number}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(boolean) => write!(formatter, "{boolean}"),
            Self::Number(number) => write_number(formatter, *number),
            Self::Text(text) => formatter.write_str(text),
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(formatter, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(object) => match object.payload() {
                Some(payload) => write!(formatter, "{payload}"),
                None => formatter.write_str("[object Object]"),
            },
            Self::Function(function) => write!(formatter, "{function}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(Rc::from(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(Rc::from(value))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}
