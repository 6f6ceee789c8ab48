//! Core value type for all Sigil data.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::Error;
use crate::list::List;
use crate::types::Type;

/// Core value type for all Sigil data.
///
/// The value model is closed: every operand and result of every command is
/// one of these kinds, and every operation boundary matches exhaustively.
/// Values are immutable and cheaply cloneable (O(1) for composites).
///
/// There is no boolean kind; logic commands produce `Int(0)` / `Int(1)` and
/// consumers use [`Value::is_truthy`].
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text value.
    Str(Arc<str>),
    /// Sequence value (eager or lazily produced).
    List(List),
    /// Function value.
    Fn(SgFn),
    /// Two-element record.
    Pair(Arc<(Value, Value)>),
}

/// Function reference.
///
/// Functions are either native (Rust) or defined (a lambda body in the
/// program's lambda table).
#[derive(Clone)]
pub enum SgFn {
    /// Native function implemented in Rust.
    Native(NativeFn),
    /// Defined function (lambda table index).
    Defined(DefinedFn),
}

/// Native function callable from Sigil.
#[derive(Clone, Copy)]
pub struct NativeFn {
    /// Function name for debugging.
    pub name: &'static str,
    /// Declared operand count.
    pub arity: u8,
    /// Function pointer.
    pub func: fn(&[Value]) -> crate::Result<Value>,
}

/// Defined function reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DefinedFn {
    /// Index into the program's lambda table.
    pub index: u32,
    /// Declared operand count.
    pub arity: u8,
}

impl SgFn {
    /// Declared operand count of this function.
    #[must_use]
    pub const fn arity(&self) -> u8 {
        match self {
            Self::Native(f) => f.arity,
            Self::Defined(f) => f.arity,
        }
    }
}

impl Value {
    /// Returns the runtime kind of this value.
    #[must_use]
    pub const fn value_type(&self) -> Type {
        match self {
            Self::Int(_) | Self::Float(_) => Type::Num,
            Self::Str(_) => Type::Str,
            Self::List(_) => Type::List,
            Self::Fn(_) => Type::Fn,
            Self::Pair(_) => Type::Pair,
        }
    }

    /// Creates a pair value.
    #[must_use]
    pub fn pair(left: Value, right: Value) -> Self {
        Self::Pair(Arc::new((left, right)))
    }

    /// Creates an eager list value.
    pub fn list<I: IntoIterator<Item = Value>>(values: I) -> Self {
        Self::List(List::eager(values))
    }

    /// Returns true if this value is truthy.
    ///
    /// Zero numbers, empty text, and empty sequences are falsy; everything
    /// else (including every function and pair) is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Int(n) => *n != 0,
            Self::Float(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(l) => !l.is_empty(),
            Self::Fn(_) | Self::Pair(_) => true,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a number as f64 (converts int to float).
    ///
    /// Note: Converting large i64 values to f64 may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a sequence reference.
    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Attempts to extract a function reference.
    #[must_use]
    pub const fn as_fn(&self) -> Option<&SgFn> {
        match self {
            Self::Fn(f) => Some(f),
            _ => None,
        }
    }

    /// Attempts to extract a pair reference.
    #[must_use]
    pub fn as_pair(&self) -> Option<(&Value, &Value)> {
        match self {
            Self::Pair(p) => Some((&p.0, &p.1)),
            _ => None,
        }
    }

    /// Extracts an integer, erroring with a type mismatch otherwise.
    ///
    /// Floats with no fractional part are accepted.
    #[allow(clippy::cast_possible_truncation)]
    pub fn expect_int(&self) -> crate::Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Float(n) if n.fract() == 0.0 => Ok(*n as i64),
            _ => Err(Error::type_mismatch(Type::Num, self.value_type())),
        }
    }

    /// Extracts a number as f64, erroring with a type mismatch otherwise.
    pub fn expect_number(&self) -> crate::Result<f64> {
        self.as_number()
            .ok_or_else(|| Error::type_mismatch(Type::Num, self.value_type()))
    }

    /// Extracts a function, erroring with a type mismatch otherwise.
    pub fn expect_fn(&self) -> crate::Result<&SgFn> {
        self.as_fn()
            .ok_or_else(|| Error::type_mismatch(Type::Fn, self.value_type()))
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Fn(a), Self::Fn(b)) => a == b,
            (Self::Pair(a), Self::Pair(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::Str(s) => s.hash(state),
            Self::List(l) => l.hash(state),
            Self::Fn(f) => f.hash(state),
            Self::Pair(p) => {
                p.0.hash(state);
                p.1.hash(state);
            }
        }
    }
}

impl PartialOrd for Value {
    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            // Cross-type numeric comparison intentionally loses precision for large i64
            (Self::Int(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Self::Str(a), Self::Str(b)) => a.partial_cmp(b),
            _ => None, // Different types or non-comparable
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::List(l) => write!(f, "{l:?}"),
            Self::Fn(func) => write!(f, "{func:?}"),
            Self::Pair(p) => write!(f, "({:?}, {:?})", p.0, p.1),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(l) => write!(f, "{l}"),
            Self::Fn(func) => write!(f, "{func}"),
            Self::Pair(p) => write!(f, "({}, {})", p.0, p.1),
        }
    }
}

// SgFn implementations

impl PartialEq for SgFn {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => std::ptr::fn_addr_eq(a.func, b.func),
            (Self::Defined(a), Self::Defined(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for SgFn {}

impl Hash for SgFn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Native(f) => {
                (f.func as usize).hash(state);
            }
            Self::Defined(f) => f.hash(state),
        }
    }
}

impl fmt::Debug for SgFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(func) => write!(f, "<native fn {}>", func.name),
            Self::Defined(func) => write!(f, "<λ#{}>", func.index),
        }
    }
}

impl fmt::Display for SgFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Int(i64::from(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_possible_wrap)]
    fn from(n: usize) -> Self {
        Self::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::Str(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Str(c.to_string().into())
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Self::List(l)
    }
}

impl From<SgFn> for Value {
    fn from(f: SgFn) -> Self {
        Self::Fn(f)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn int_accessors_round_trip(n in any::<i64>()) {
            let v = Value::Int(n);
            prop_assert_eq!(v.as_int(), Some(n));
            prop_assert_eq!(v.expect_int().unwrap(), n);
        }

        #[test]
        fn nonzero_ints_are_truthy(n in any::<i64>()) {
            prop_assert_eq!(Value::Int(n).is_truthy(), n != 0);
        }

        #[test]
        fn text_round_trips_through_from(s in "[a-zA-Z0-9 ]{0,30}") {
            let v = Value::from(s.as_str());
            prop_assert_eq!(v.as_str(), Some(s.as_str()));
        }

        #[test]
        fn list_from_vec_preserves_length(xs in proptest::collection::vec(any::<i64>(), 0..30)) {
            let len = xs.len();
            let v: Value = xs.into();
            prop_assert_eq!(v.as_list().unwrap().len(), len);
        }
    }
}
