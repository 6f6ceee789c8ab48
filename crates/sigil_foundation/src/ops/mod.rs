//! Primitive operations invoked by the command table.
//!
//! This module is the value library: arithmetic, comparison, number theory,
//! sequence manipulation, text manipulation, matrix helpers, and base
//! conversion. Each function takes and returns [`Value`]s; the command table
//! only locates, arity-binds, and invokes them.

pub mod arith;
pub mod compare;
pub mod convert;
pub mod matrix;
pub mod number;
pub mod seq;
pub mod string;

use std::sync::Arc;

use crate::error::Error;
use crate::list::List;
use crate::types::Type;
use crate::value::Value;

/// A sequence operand, preserving whether it came from text.
///
/// Many sequence operations are type-preserving: applied to text they work
/// on its symbols and yield text back, applied to a list they yield a list.
pub enum Seq {
    /// Text operand, iterated symbol by symbol.
    Str(Arc<str>),
    /// Sequence operand.
    List(List),
}

impl Seq {
    /// The elements of the sequence; text yields one-symbol text values.
    pub fn values(&self) -> Vec<Value> {
        match self {
            Self::Str(s) => s.chars().map(Value::from).collect(),
            Self::List(l) => l.materialize().into_iter().collect(),
        }
    }

    /// Rebuilds a value of the same flavor from new elements.
    ///
    /// A text-flavored sequence is re-joined into text when every element
    /// still renders as text; otherwise the result is a list.
    pub fn rebuild(&self, values: Vec<Value>) -> Value {
        match self {
            Self::Str(_) => {
                if values.iter().all(|v| matches!(v, Value::Str(_))) {
                    let joined: String =
                        values.iter().filter_map(Value::as_str).collect();
                    Value::from(joined)
                } else {
                    Value::list(values)
                }
            }
            Self::List(_) => Value::list(values),
        }
    }
}

/// Interprets a value as a sequence operand.
///
/// Numbers become the range `1..=n` (the conventional implicit range),
/// text stays text-flavored, sequences pass through, and a pair becomes its
/// two elements.
pub fn as_seq(v: &Value) -> crate::Result<Seq> {
    match v {
        Value::Int(_) | Value::Float(_) => {
            let n = v.expect_int()?;
            Ok(Seq::List(List::eager((1..=n).map(Value::Int))))
        }
        Value::Str(s) => Ok(Seq::Str(Arc::clone(s))),
        Value::List(l) => Ok(Seq::List(l.clone())),
        Value::Pair(p) => Ok(Seq::List(List::eager([p.0.clone(), p.1.clone()]))),
        Value::Fn(_) => Err(Error::type_mismatch(Type::List, Type::Fn)),
    }
}

/// Materializes a value as a plain vector of elements (see [`as_seq`]).
pub fn to_vec(v: &Value) -> crate::Result<Vec<Value>> {
    Ok(as_seq(v)?.values())
}

/// Formats a value the way print commands render it.
#[must_use]
pub fn str_of(v: &Value) -> String {
    v.to_string()
}
