//! Objects with named slots and a prototype chain.
//!
//! Slot lookup reads the object's own slots first and then walks the
//! prototype chain. An object may also box a primitive payload (a list or
//! a text) so that the primitive can carry methods, the way list and text
//! values are given their native prototypes in [`crate::natives`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use super::{Function, Value};

thread_local! {
    /// Addresses of the objects currently being formatted on this thread.
    static FORMATTING: RefCell<FxHashSet<usize>> = RefCell::new(FxHashSet::default());
}

/// Marks an object as being formatted until dropped.
struct FormatGuard(usize);

impl FormatGuard {
    /// Returns `None` when the object is already being formatted further up.
    fn enter(address: usize) -> Option<Self> {
        let inserted = FORMATTING.with(|formatting| formatting.borrow_mut().insert(address));
        if inserted { Some(Self(address)) } else { None }
    }
}

impl Drop for FormatGuard {
    fn drop(&mut self) {
        FORMATTING.with(|formatting| formatting.borrow_mut().remove(&self.0));
    }
}

struct ObjectInner {
    prototype: Option<Object>,
    slots: RefCell<BTreeMap<Rc<str>, Value>>,
    payload: Option<Value>,
}

/// A shared, mutable bag of named slots.
///
/// Cloning an `Object` yields another handle to the same object.
///
/// # Examples
///
/// ```rust
/// use pointfree::value::{Object, Value};
///
/// let prototype = Object::new();
/// prototype.set("greeting", "hello");
///
/// let child = Object::with_prototype(prototype.clone());
/// assert_eq!(child.get("greeting"), Some(Value::from("hello")));
///
/// child.set("greeting", "hi");
/// assert_eq!(child.get("greeting"), Some(Value::from("hi")));
/// assert_eq!(prototype.get("greeting"), Some(Value::from("hello")));
/// ```
#[derive(Clone)]
pub struct Object(Rc<ObjectInner>);

impl Object {
    /// Creates an empty object without a prototype.
    pub fn new() -> Self {
        Self::build(None, None)
    }

    /// Creates an empty object that inherits from `prototype`.
    pub fn with_prototype(prototype: Self) -> Self {
        Self::build(Some(prototype), None)
    }

    /// Boxes `payload` into an object that inherits from `prototype`.
    pub fn boxed(prototype: Option<Self>, payload: Value) -> Self {
        Self::build(prototype, Some(payload))
    }

    fn build(prototype: Option<Self>, payload: Option<Value>) -> Self {
        Self(Rc::new(ObjectInner {
            prototype,
            slots: RefCell::new(BTreeMap::new()),
            payload,
        }))
    }

    /// The prototype this object inherits from.
    pub fn prototype(&self) -> Option<&Self> {
        self.0.prototype.as_ref()
    }

    /// The boxed primitive, if any.
    pub fn payload(&self) -> Option<&Value> {
        self.0.payload.as_ref()
    }

    /// Installs `value` under `name` as an own slot, shadowing any
    /// inherited slot of the same name.
    pub fn set(&self, name: impl Into<Rc<str>>, value: impl Into<Value>) {
        self.0.slots.borrow_mut().insert(name.into(), value.into());
    }

    /// Installs a function under its own name.
    ///
    /// Anonymous functions are ignored.
    pub fn define(&self, function: Function) {
        if let Some(name) = function.name().map(Rc::<str>::from) {
            self.set(name, function);
        }
    }

    /// Reads an own slot without consulting the prototype chain.
    pub fn get_own(&self, name: &str) -> Option<Value> {
        self.0.slots.borrow().get(name).cloned()
    }

    /// Reads a slot, walking the prototype chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = Some(self);
        while let Some(object) = current {
            if let Some(value) = object.get_own(name) {
                return Some(value);
            }
            current = object.prototype();
        }
        None
    }

    /// Returns `true` when both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(_guard) = FormatGuard::enter(Rc::as_ptr(&self.0).addr()) else {
            return formatter.write_str("[Circular]");
        };
        match self.payload() {
            Some(payload) => write!(formatter, "Object({payload:?})"),
            None => formatter
                .debug_map()
                .entries(self.0.slots.borrow().iter())
                .finish(),
        }
    }
}
