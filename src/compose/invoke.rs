//! Turning methods into free, curried functions.
//!
//! [`invoke`] captures the method installed under a name on an owner
//! (typically a prototype) and returns a curried function whose last
//! argument is the receiver. When the chain completes, the method currently
//! installed on the receiver is compared by identity with the captured one:
//!
//! - identical: the method runs with the receiver and the leading arguments
//! - different: the adapter yields [`Value::Undefined`] without calling
//!   anything
//!
//! A plain list or text receiver is first boxed onto the owner, the way the
//! host wraps a primitive when one of its methods is read. Results of native
//! methods can therefore feed the next adapter directly.
//!
//! A mismatch is not an error. Callers treat the absent result as an
//! ordinary branch.

use std::rc::Rc;

use super::curry_n;
use crate::value::{CallError, Function, Object, Value};

/// Adapts the method `name` of `owner` into a curried free function.
///
/// The arity is the method's declared arity plus one for the receiver.
///
/// # Errors
///
/// Returns [`CallError::MissingMethod`] when `owner` has no function under
/// `name`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::invoke;
/// use pointfree::value::{Function, Object, Value};
/// use pointfree::values;
///
/// let prototype = Object::new();
/// prototype.define(Function::named("greet", 1, |receiver, arguments| {
///     let name = receiver.and_then(Value::as_object).and_then(|object| object.get("name"));
///     Value::from(format!("{}, {}", arguments[0], name.unwrap_or_default()))
/// }));
///
/// let greet = invoke("greet", &prototype)?;
/// assert_eq!(greet.arity(), 2);
///
/// let person = Object::with_prototype(prototype.clone());
/// person.set("name", "Ada");
/// let hello = greet.call(&values!["Hello"]);
/// assert_eq!(hello.call(&[Value::from(person.clone())]), Ok(Value::from("Hello, Ada")));
///
/// // A receiver with a different method under the same name is refused.
/// person.set("greet", Function::named("greet", 1, |_, _| Value::from("impostor")));
/// assert_eq!(hello.call(&[Value::from(person)]), Ok(Value::Undefined));
/// # Ok::<(), pointfree::value::CallError>(())
/// ```
pub fn invoke(name: &str, owner: &Object) -> Result<Function, CallError> {
    invoke_with(name, owner, None)
}

/// Adapts the method `name` of `owner` with an explicit arity, receiver
/// included.
///
/// # Errors
///
/// Returns [`CallError::MissingMethod`] when `owner` has no function under
/// `name`.
pub fn invoke_n(name: &str, owner: &Object, arity: usize) -> Result<Function, CallError> {
    invoke_with(name, owner, Some(arity))
}

fn invoke_with(name: &str, owner: &Object, arity: Option<usize>) -> Result<Function, CallError> {
    let method = Value::from(owner.clone())
        .method(name)
        .ok_or_else(|| CallError::MissingMethod {
            name: name.to_string(),
        })?;
    let arity = arity.unwrap_or(method.arity() + 1);
    let name: Rc<str> = Rc::from(name);
    let owner = owner.clone();
    let adapter = Function::named(Rc::clone(&name), arity, move |_receiver, arguments| {
        dispatch(&name, &owner, &method, arguments)
    });
    Ok(curry_n(&adapter, arity))
}

/// Boxes a plain list or text onto `owner`. Other values are returned as is.
fn autobox(owner: &Object, target: &Value) -> Value {
    match target {
        Value::List(_) | Value::Text(_) => {
            Value::Object(Object::boxed(Some(owner.clone()), target.clone()))
        }
        other => other.clone(),
    }
}

fn dispatch(name: &str, owner: &Object, method: &Function, arguments: &[Value]) -> Value {
    let Some((target, leading)) = arguments.split_last() else {
        return Value::Undefined;
    };
    let target = autobox(owner, target);
    match target.method(name) {
        Some(installed) if installed.ptr_eq(method) => installed.call_with(Some(&target), leading),
        installed => {
            tracing::debug!(
                method = name,
                receiver = target.type_name(),
                found = installed.is_some(),
                "receiver does not share the captured method"
            );
            Value::Undefined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    fn owner_with_echo() -> Object {
        let owner = Object::new();
        owner.define(Function::named("echo", 2, |receiver, arguments| {
            let mut items = vec![receiver.cloned().unwrap_or_default()];
            items.extend(arguments.iter().cloned());
            Value::list(items)
        }));
        owner
    }

    #[test]
    fn missing_method_is_an_error() {
        let error = invoke("absent", &Object::new()).unwrap_err();
        assert_eq!(
            error,
            CallError::MissingMethod {
                name: "absent".to_string()
            }
        );
    }

    #[test]
    fn non_function_slot_is_an_error() {
        let owner = Object::new();
        owner.set("length", 3);
        assert!(invoke("length", &owner).is_err());
    }

    #[test]
    fn receiver_is_the_last_argument() {
        let owner = owner_with_echo();
        let echo = invoke("echo", &owner).unwrap();
        let receiver = Value::from(Object::with_prototype(owner));
        assert_eq!(
            echo.call(&[Value::from(1), Value::from(2), receiver.clone()]),
            Value::list([receiver, Value::from(1), Value::from(2)])
        );
    }

    #[test]
    fn non_object_receiver_yields_undefined() {
        let echo = invoke("echo", &owner_with_echo()).unwrap();
        assert_eq!(echo.call(&values![1, 2, 3]), Value::Undefined);
    }

    #[test]
    fn plain_list_receiver_is_boxed_onto_the_owner() {
        let owner = owner_with_echo();
        let echo = invoke("echo", &owner).unwrap();
        let result = echo.call(&[Value::from(1), Value::from(2), Value::list(values![3])]);
        let items = result.as_list().unwrap();
        let receiver = items[0].as_object().unwrap();
        assert!(receiver.prototype().unwrap().ptr_eq(&owner));
        assert_eq!(items[0].unboxed(), &Value::list(values![3]));
        assert_eq!(&items[1..], values![1, 2].as_slice());
    }

    #[test]
    fn explicit_arity_overrides_declared_arity() {
        let owner = owner_with_echo();
        let echo = invoke_n("echo", &owner, 2).unwrap();
        assert_eq!(echo.arity(), 2);
        let receiver = Value::from(Object::with_prototype(owner));
        assert_eq!(
            echo.call(&[Value::from(1), receiver.clone()]),
            Value::list([receiver, Value::from(1)])
        );
    }

    #[test]
    fn zero_explicit_arity_without_arguments_yields_undefined() {
        let echo = invoke_n("echo", &owner_with_echo(), 0).unwrap();
        assert_eq!(echo.call(&[]), Value::Undefined);
    }

    #[test]
    fn adapter_is_named_after_the_method() {
        let echo = invoke("echo", &owner_with_echo()).unwrap();
        assert_eq!(echo.name(), Some("echo"));
    }
}
