//! Native prototypes for list and text values.
//!
//! Lists and texts are plain [`Value`]s without slots. To call methods on
//! them they are boxed into an [`Object`] whose prototype carries the
//! native methods, as [`Prototypes::list`] and [`Prototypes::text`] do.
//! Combined with [`invoke`](crate::compose::invoke), these methods become
//! ordinary curried functions taking the receiver last, and plain values
//! passed to such a function are boxed on the fly.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::compose::{invoke, invoke_n};
//! use pointfree::natives::Prototypes;
//! use pointfree::value::Value;
//! use pointfree::values;
//!
//! let prototypes = Prototypes::standard();
//!
//! let join = invoke("join", prototypes.list_prototype())?;
//! let words = prototypes.list(values!["a", "b", "c"]);
//! assert_eq!(join.call(&[Value::from("-"), words]), Value::from("a-b-c"));
//!
//! let split = invoke_n("split", prototypes.text_prototype(), 2)?;
//! let on_comma = split.call(&values![","]);
//! let parts = on_comma.call(&[prototypes.text("x,y")])?;
//! assert_eq!(parts.unboxed(), &Value::list(values!["x", "y"]));
//! # Ok::<(), pointfree::value::CallError>(())
//! ```

mod list;
mod text;

use crate::value::{Object, Value};

/// The native list and text prototypes.
#[derive(Clone, Debug)]
pub struct Prototypes {
    list: Object,
    text: Object,
}

impl Prototypes {
    /// Builds fresh prototypes carrying every native method.
    ///
    /// Each call builds new method functions, so adapters captured from one
    /// set of prototypes refuse receivers boxed by another.
    pub fn standard() -> Self {
        let list = Object::new();
        list::install(&list);
        let text = Object::new();
        text::install(&text, &list);
        Self { list, text }
    }

    /// The prototype shared by boxed lists.
    pub const fn list_prototype(&self) -> &Object {
        &self.list
    }

    /// The prototype shared by boxed texts.
    pub const fn text_prototype(&self) -> &Object {
        &self.text
    }

    /// Boxes `items` as a list receiver.
    pub fn list(&self, items: impl IntoIterator<Item = Value>) -> Value {
        Value::Object(Object::boxed(Some(self.list.clone()), Value::list(items)))
    }

    /// Boxes `text` as a text receiver.
    pub fn text(&self, text: &str) -> Value {
        Value::Object(Object::boxed(Some(self.text.clone()), Value::from(text)))
    }
}

/// Converts `value` to an integer the way the host's native methods read
/// positions: numeric text is parsed, booleans count as 0 or 1, and
/// anything that is not a number (NaN included) becomes 0. Infinities are
/// kept.
pub(crate) fn to_integer(value: &Value) -> f64 {
    let number = match value {
        Value::Number(number) => *number,
        Value::Bool(boolean) => f64::from(u8::from(*boolean)),
        Value::Undefined | Value::Null | Value::Function(_) => 0.0,
        Value::Text(_) | Value::List(_) | Value::Object(_) => parse_number(&value.to_string()),
    };
    if number.is_nan() { 0.0 } else { number.trunc() }
}

fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    match text {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if text
            .chars()
            .any(|character| character.is_ascii_alphabetic() && !matches!(character, 'e' | 'E')) =>
        {
            f64::NAN
        }
        _ => text.parse().unwrap_or(f64::NAN),
    }
}

/// Resolves a possibly negative position against `length`, the way the
/// host's native slicing methods do. `Undefined` resolves to `default`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub(crate) fn relative_index(position: &Value, length: usize, default: usize) -> usize {
    if position.is_undefined() {
        return default;
    }
    let length_number = length as f64;
    let integer = to_integer(position);
    if integer < 0.0 {
        (length_number + integer).max(0.0) as usize
    } else {
        integer.min(length_number) as usize
    }
}

/// Re-boxes `payload` onto the prototype of `receiver`, or returns it
/// unboxed when the receiver was a plain value.
pub(crate) fn rebox(receiver: &Value, payload: Value) -> Value {
    match receiver.as_object() {
        Some(object) => Value::Object(Object::boxed(object.prototype().cloned(), payload)),
        None => payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, 7)]
    #[case(Value::from(2), 2)]
    #[case(Value::from(-2), 3)]
    #[case(Value::from(-10), 0)]
    #[case(Value::from(99), 5)]
    #[case(Value::from(1.9), 1)]
    #[case(Value::from(f64::NAN), 0)]
    #[case(Value::from("x"), 0)]
    #[case(Value::from("1"), 1)]
    #[case(Value::from(" -2 "), 3)]
    #[case(Value::Null, 0)]
    #[case(Value::from(true), 1)]
    #[case(Value::from(f64::INFINITY), 5)]
    #[case(Value::from(f64::NEG_INFINITY), 0)]
    fn resolves_relative_positions(#[case] position: Value, #[case] expected: usize) {
        assert_eq!(relative_index(&position, 5, 7), expected);
    }

    #[rstest]
    #[case(Value::from(f64::NAN), 0.0)]
    #[case(Value::from("12"), 12.0)]
    #[case(Value::from("1e2"), 100.0)]
    #[case(Value::from("inf"), 0.0)]
    #[case(Value::from(""), 0.0)]
    #[case(Value::from(-1.5), -1.0)]
    #[case(Value::list(values![7]), 7.0)]
    fn converts_to_integer_like_the_host(#[case] value: Value, #[case] expected: f64) {
        assert!((to_integer(&value) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn boxed_values_use_their_prototype() {
        let prototypes = Prototypes::standard();
        let list = prototypes.list([Value::from(1)]);
        let object = list.as_object().unwrap();
        assert!(object.prototype().unwrap().ptr_eq(prototypes.list_prototype()));
        assert_eq!(list.unboxed(), &Value::list([Value::from(1)]));
    }

    #[test]
    fn independent_standards_do_not_share_methods() {
        let first = Prototypes::standard();
        let second = Prototypes::standard();
        let left = Value::from(first.list_prototype().clone()).method("slice");
        let right = Value::from(second.list_prototype().clone()).method("slice");
        assert!(!left.unwrap().ptr_eq(&right.unwrap()));
    }
}
