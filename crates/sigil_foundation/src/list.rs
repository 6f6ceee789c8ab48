//! Sequence values: eager persistent vectors and lazily-produced streams.
//!
//! Sigil sequences come in two flavors. Eager lists are persistent vectors
//! (O(1) clone, structural sharing). Lazy lists memoize a boxed iterator
//! source and may be infinite; consumers index or take prefixes without
//! materializing the whole sequence. [`List::materialize`] converts lazy to
//! eager and must only be applied to sequences known to be finite.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

use crate::collections::SgVec;
use crate::value::Value;

/// A sequence value.
#[derive(Clone)]
pub enum List {
    /// Fully realized sequence.
    Eager(SgVec<Value>),
    /// Lazily-produced (possibly infinite) sequence.
    Lazy(LazyList),
}

impl List {
    /// Creates an empty eager list.
    #[must_use]
    pub fn new() -> Self {
        Self::Eager(SgVec::new())
    }

    /// Creates an eager list from the given values.
    pub fn eager<I: IntoIterator<Item = Value>>(values: I) -> Self {
        Self::Eager(values.into_iter().collect())
    }

    /// Creates a lazy list over the given source iterator.
    ///
    /// The `name` labels the stream in debug output.
    #[must_use]
    pub fn lazy(name: &'static str, source: Box<dyn Iterator<Item = Value>>) -> Self {
        Self::Lazy(LazyList::new(name, source))
    }

    /// Returns true if this is a lazily-produced sequence.
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Gets an element by index without materializing past it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Self::Eager(v) => v.get(index).cloned(),
            Self::Lazy(l) => l.get(index),
        }
    }

    /// Returns the first `n` elements, forcing at most `n` productions.
    #[must_use]
    pub fn prefix(&self, n: usize) -> Vec<Value> {
        match self {
            Self::Eager(v) => v.iter().take(n).cloned().collect(),
            Self::Lazy(l) => l.prefix(n),
        }
    }

    /// Returns true if the sequence has no elements.
    ///
    /// For lazy lists this forces at most one production.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Eager(v) => v.is_empty(),
            Self::Lazy(l) => l.get(0).is_none(),
        }
    }

    /// Returns the length of the sequence.
    ///
    /// Forces full production of a lazy list; must not be called on a
    /// sequence that may be infinite (use [`List::prefix`] for bounded
    /// access).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Eager(v) => v.len(),
            Self::Lazy(l) => l.force_all().len(),
        }
    }

    /// Makes the sequence concrete, forcing full production of a lazy list.
    #[must_use]
    pub fn materialize(&self) -> SgVec<Value> {
        match self {
            Self::Eager(v) => v.clone(),
            Self::Lazy(l) => l.force_all(),
        }
    }

    /// Iterates the materialized sequence.
    pub fn iter(&self) -> impl Iterator<Item = Value> {
        self.materialize().into_iter()
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Eager(a), Self::Eager(b)) => a == b,
            // Structural equality on a possibly-infinite stream cannot
            // terminate; lazy lists compare by identity only.
            (Self::Lazy(a), Self::Lazy(b)) => Arc::ptr_eq(&a.inner, &b.inner),
            _ => false,
        }
    }
}

impl Eq for List {}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Eager(v) => v.hash(state),
            Self::Lazy(l) => (Arc::as_ptr(&l.inner) as usize).hash(state),
        }
    }
}

// Eager lists print in full; lazy lists print the already-cached prefix plus
// an ellipsis (Display must not force production).
fn fmt_list(list: &List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    match list {
        List::Eager(v) => {
            for (i, item) in v.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{item}")?;
            }
        }
        List::Lazy(l) => {
            for (i, item) in l.cached().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{item}")?;
            }
            write!(f, "…")?;
        }
    }
    write!(f, "]")
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_list(self, f)
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_list(self, f)
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Eager(iter.into_iter().collect())
    }
}

/// A memoizing lazily-produced sequence.
///
/// Productions are cached, so repeated indexing never re-runs the source.
/// The mutex exists for shared-ownership mutation, not concurrency: the
/// interpreter is single-threaded by construction.
#[derive(Clone)]
pub struct LazyList {
    inner: Arc<Mutex<LazyInner>>,
    name: &'static str,
}

struct LazyInner {
    cache: Vec<Value>,
    source: Box<dyn Iterator<Item = Value>>,
    exhausted: bool,
}

impl LazyList {
    fn new(name: &'static str, source: Box<dyn Iterator<Item = Value>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LazyInner {
                cache: Vec::new(),
                source,
                exhausted: false,
            })),
            name,
        }
    }

    /// The label given to this stream at construction.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Gets an element, producing up to `index + 1` elements.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        let mut inner = self.inner.lock().unwrap();
        while inner.cache.len() <= index && !inner.exhausted {
            match inner.source.next() {
                Some(v) => inner.cache.push(v),
                None => inner.exhausted = true,
            }
        }
        inner.cache.get(index).cloned()
    }

    /// Returns the first `n` elements, producing at most `n`.
    #[must_use]
    pub fn prefix(&self, n: usize) -> Vec<Value> {
        if n > 0 {
            let _ = self.get(n - 1);
        }
        let inner = self.inner.lock().unwrap();
        inner.cache.iter().take(n).cloned().collect()
    }

    /// Returns the elements produced so far, without forcing more.
    #[must_use]
    pub fn cached(&self) -> Vec<Value> {
        self.inner.lock().unwrap().cache.clone()
    }

    /// Drains the source completely. Loops forever on an infinite stream.
    #[must_use]
    pub fn force_all(&self) -> SgVec<Value> {
        let mut inner = self.inner.lock().unwrap();
        while !inner.exhausted {
            match inner.source.next() {
                Some(v) => inner.cache.push(v),
                None => inner.exhausted = true,
            }
        }
        inner.cache.iter().cloned().collect()
    }
}

impl fmt::Debug for LazyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<lazy {}>", self.name)
    }
}

// =============================================================================
// Lazy sources
// =============================================================================

/// The non-negative integers `0, 1, 2, …` as an infinite lazy sequence.
#[must_use]
pub fn naturals() -> List {
    List::lazy("naturals", Box::new((0i64..).map(Value::Int)))
}

/// The Fibonacci numbers `1, 1, 2, 3, 5, …` as an infinite lazy sequence.
#[must_use]
pub fn fibonacci() -> List {
    let mut state = (1i64, 1i64);
    List::lazy(
        "fibonacci",
        Box::new(std::iter::from_fn(move || {
            let out = state.0;
            state = (state.1, state.0.checked_add(state.1)?);
            Some(Value::Int(out))
        })),
    )
}

/// The factorials `1, 1, 2, 6, 24, …` as an infinite lazy sequence.
#[must_use]
pub fn factorials() -> List {
    let mut n = 0i64;
    let mut acc = 1i64;
    List::lazy(
        "factorials",
        Box::new(std::iter::from_fn(move || {
            let out = acc;
            n += 1;
            acc = acc.checked_mul(n)?;
            Some(Value::Int(out))
        })),
    )
}

/// The primes `2, 3, 5, 7, …` as an infinite lazy sequence.
#[must_use]
pub fn primes() -> List {
    let mut candidate = 1i64;
    List::lazy(
        "primes",
        Box::new(std::iter::from_fn(move || {
            loop {
                candidate = candidate.checked_add(1)?;
                if crate::ops::number::is_prime(candidate) {
                    return Some(Value::Int(candidate));
                }
            }
        })),
    )
}
