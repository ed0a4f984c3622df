//! Declared call shapes and their per-arity cache.
//!
//! Every [`Function`](super::Function) carries a [`Signature`]: its declared
//! arity. Parameter names `a0 .. a{n-1}` are rendered on demand and never
//! stored. Signatures are built once per distinct arity and shared
//! afterwards, so restating the arity of a function (see
//! [`crate::compose::fix_arity`]) only costs a cache lookup.
//!
//! The cache is append-only and never invalidated. Function values are
//! single-threaded, so the cache is thread-local.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

thread_local! {
    static SIGNATURES: RefCell<FxHashMap<usize, Rc<Signature>>> =
        RefCell::new(FxHashMap::default());
}

/// The declared shape of a function: how many arguments it expects.
#[derive(Debug, PartialEq, Eq)]
pub struct Signature {
    arity: usize,
}

impl Signature {
    /// Returns the shared signature for `arity`, building it on first use.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::value::Signature;
    /// use std::rc::Rc;
    ///
    /// let first = Signature::of(3);
    /// let second = Signature::of(3);
    /// assert!(Rc::ptr_eq(&first, &second));
    /// assert_eq!(first.parameters().collect::<Vec<_>>(), ["a0", "a1", "a2"]);
    /// ```
    pub fn of(arity: usize) -> Rc<Self> {
        SIGNATURES.with(|signatures| {
            Rc::clone(signatures.borrow_mut().entry(arity).or_insert_with(|| {
                tracing::trace!(arity, "building signature");
                Rc::new(Self { arity })
            }))
        })
    }

    /// The number of declared parameters.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The generated parameter names, rendered lazily.
    pub fn parameters(&self) -> impl DoubleEndedIterator<Item = String> + ExactSizeIterator {
        (0..self.arity).map(|index| format!("a{index}"))
    }

    /// Number of distinct signatures built on the current thread.
    pub fn cached() -> usize {
        SIGNATURES.with(|signatures| signatures.borrow().len())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("(")?;
        for index in 0..self.arity {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "a{index}")?;
        }
        formatter.write_str(")")
    }
}
