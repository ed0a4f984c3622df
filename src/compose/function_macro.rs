//! Macros for building dynamic functions and argument lists.
//!
//! The [`function!`] macro counts the parameters of a closure-like literal
//! at compile time and uses that count as the declared arity of the
//! resulting [`Function`](crate::value::Function). This is what lets
//! [`curry`](crate::compose::curry) know how many arguments to wait for
//! without runtime reflection.
//!
//! Missing arguments are bound to [`Value::Undefined`](crate::value::Value::Undefined);
//! surplus arguments are ignored by the body (but still visible to any
//! combinator wrapping it).

/// Builds a [`Function`](crate::value::Function) from a closure-like literal.
///
/// Every parameter is bound to a [`Value`](crate::value::Value). The body
/// may return anything that converts into a `Value`.
///
/// # Syntax
///
/// - `function!(|a, b| body)` creates an anonymous function of arity 2
/// - `function!("name", |a| body)` creates a named function of arity 1
/// - `function!(|| body)` creates a function of arity 0
///
/// # Examples
///
/// ## Declared arity
///
/// ```
/// use pointfree::{function, values};
/// use pointfree::value::Value;
///
/// let concat = function!(|left, right| format!("{left}{right}"));
/// assert_eq!(concat.arity(), 2);
/// assert_eq!(concat.call(&values!["ab", "cd"]), Value::from("abcd"));
/// ```
///
/// ## Missing arguments are undefined
///
/// ```
/// use pointfree::{function, values};
/// use pointfree::value::Value;
///
/// let second = function!(|_first, second| second);
/// assert_eq!(second.call(&values![1]), Value::Undefined);
/// ```
///
/// ## Named functions
///
/// ```
/// use pointfree::function;
///
/// let always_one = function!("one", || 1);
/// assert_eq!(always_one.name(), Some("one"));
/// assert_eq!(always_one.arity(), 0);
/// ```
#[macro_export]
macro_rules! function {
    (@count) => { 0usize };
    (@count $head:ident $($tail:ident)*) => {
        1usize + $crate::function!(@count $($tail)*)
    };
    (@body $($parameter:ident)* => $body:expr) => {
        move |_receiver: ::std::option::Option<&$crate::value::Value>,
              arguments: &[$crate::value::Value]| {
            #[allow(unused_mut)]
            let mut _arguments = arguments.iter();
            $(
                let $parameter: $crate::value::Value =
                    _arguments.next().cloned().unwrap_or_default();
            )*
            $crate::value::Value::from($body)
        }
    };
    ($name:literal, || $body:expr) => {
        $crate::value::Function::named($name, 0, $crate::function!(@body => $body))
    };
    ($name:literal, |$($parameter:ident),* $(,)?| $body:expr) => {
        $crate::value::Function::named(
            $name,
            $crate::function!(@count $($parameter)*),
            $crate::function!(@body $($parameter)* => $body),
        )
    };
    (|| $body:expr) => {
        $crate::value::Function::new(0, $crate::function!(@body => $body))
    };
    (|$($parameter:ident),* $(,)?| $body:expr) => {
        $crate::value::Function::new(
            $crate::function!(@count $($parameter)*),
            $crate::function!(@body $($parameter)* => $body),
        )
    };
}

/// Builds an array of [`Value`](crate::value::Value)s from heterogeneous
/// literals.
///
/// # Examples
///
/// ```
/// use pointfree::values;
/// use pointfree::value::Value;
///
/// let arguments = values![1, "two", true];
/// assert_eq!(arguments[1], Value::from("two"));
/// ```
#[macro_export]
macro_rules! values {
    ($($item:expr),* $(,)?) => {
        [$($crate::value::Value::from($item)),*]
    };
}
