//! Runtime type descriptors for error reporting.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The runtime kind of a [`crate::Value`].
///
/// The value model is a closed set: every operand and result is one of these
/// kinds, and every operation boundary matches exhaustively over them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// Numeric value (integer or float).
    Num,
    /// Text value.
    Str,
    /// Sequence value (eager or lazily produced).
    List,
    /// Function value.
    Fn,
    /// Two-element record.
    Pair,
    /// Any kind (used for "expected" slots that accept everything).
    Any,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Num => "number",
            Self::Str => "text",
            Self::List => "list",
            Self::Fn => "function",
            Self::Pair => "pair",
            Self::Any => "any",
        };
        write!(f, "{name}")
    }
}
