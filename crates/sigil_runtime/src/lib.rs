//! REPL and CLI driver for Sigil.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop
//! - [`Session`] - Long-lived evaluation state (tables, environment,
//!   lambdas)
//! - CLI argument parsing and execution (in the `sigil` binary)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use repl::Repl;
pub use session::Session;
