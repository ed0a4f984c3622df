//! Native text methods.
//!
//! Positions count characters, not bytes.

use super::{relative_index, to_integer};
use crate::value::{Function, Object, Value};

fn text_of(receiver: Option<&Value>) -> Option<&str> {
    receiver?.unboxed().as_text()
}

fn argument(arguments: &[Value], index: usize) -> &Value {
    arguments.get(index).unwrap_or(&Value::Undefined)
}

/// The character at `position`, which is coerced to an integer first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn character_at(text: &str, position: &Value) -> Option<char> {
    let index = to_integer(position);
    if index < 0.0 || index.is_infinite() {
        return None;
    }
    text.chars().nth(index as usize)
}

fn character_position(text: &str, byte: usize) -> Value {
    Value::from(text[..byte].chars().count())
}

/// Defines a text method whose body only needs the receiver's text.
fn define(prototype: &Object, name: &'static str, arity: usize, body: fn(&str, &[Value]) -> Value) {
    prototype.define(Function::named(name, arity, move |receiver, arguments| {
        text_of(receiver).map_or(Value::Undefined, |text| body(text, arguments))
    }));
}

pub(super) fn install(prototype: &Object, list_prototype: &Object) {
    define(prototype, "slice", 2, |text, arguments| {
        let length = text.chars().count();
        let start = relative_index(argument(arguments, 0), length, 0);
        let end = relative_index(argument(arguments, 1), length, length);
        let sliced: String = text.chars().skip(start).take(end.saturating_sub(start)).collect();
        Value::from(sliced)
    });

    define(prototype, "charAt", 1, |text, arguments| {
        let character = character_at(text, argument(arguments, 0));
        Value::from(character.map(String::from).unwrap_or_default())
    });

    // Code point of the character, NaN when out of range.
    define(prototype, "charCodeAt", 1, |text, arguments| {
        character_at(text, argument(arguments, 0))
            .map_or(Value::from(f64::NAN), |character| Value::from(f64::from(u32::from(character))))
    });

    define(prototype, "indexOf", 1, |text, arguments| {
        let search = argument(arguments, 0).to_string();
        text.find(&search)
            .map_or(Value::from(-1), |byte| character_position(text, byte))
    });

    define(prototype, "lastIndexOf", 1, |text, arguments| {
        let search = argument(arguments, 0).to_string();
        text.rfind(&search)
            .map_or(Value::from(-1), |byte| character_position(text, byte))
    });

    define(prototype, "toUpperCase", 0, |text, _| Value::from(text.to_uppercase()));

    define(prototype, "toLowerCase", 0, |text, _| Value::from(text.to_lowercase()));

    let list_prototype = list_prototype.clone();
    prototype.define(Function::named("split", 2, move |receiver, arguments| {
        let Some(text) = text_of(receiver) else {
            return Value::Undefined;
        };
        let limit = match argument(arguments, 1) {
            Value::Undefined => usize::MAX,
            other => relative_index(other, usize::MAX, 0),
        };
        let parts: Vec<Value> = match argument(arguments, 0) {
            Value::Undefined => vec![Value::from(text)],
            separator => {
                let separator = separator.to_string();
                if separator.is_empty() {
                    text.chars().map(|character| Value::from(character.to_string())).collect()
                } else {
                    text.split(separator.as_str()).map(Value::from).collect()
                }
            }
        };
        let parts: Vec<Value> = parts.into_iter().take(limit).collect();
        Value::Object(Object::boxed(Some(list_prototype.clone()), Value::from(parts)))
    }));
}
