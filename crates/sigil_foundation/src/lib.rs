//! Core value model, persistent sequences, and primitive operations for Sigil.
//!
//! This crate provides:
//! - [`Value`] - The closed tagged value type (number, text, sequence,
//!   function, pair)
//! - [`List`] - Eager persistent vectors and memoizing lazy sequences
//! - [`Error`] - Rich error types with context
//! - [`ops`] - The primitive-operation library the command table invokes
//!
//! The command-compilation core (`sigil_language`) consumes these as
//! already-correct primitives; the semantics of individual primitives live
//! here, not in the table.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod list;
pub mod ops;
pub mod types;
pub mod value;

pub use collections::SgVec;
pub use error::{Error, ErrorContext, ErrorKind};
pub use list::{List, LazyList};
pub use types::Type;
pub use value::{DefinedFn, NativeFn, SgFn, Value};

/// Result type alias using the Sigil [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
