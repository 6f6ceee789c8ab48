//! Sigil - stack-based golfing language
//!
//! This crate re-exports all layers of the Sigil system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: sigil_runtime    — REPL, CLI driver
//! Layer 1: sigil_language   — Code page, lexer, command/transformer
//!                             tables, interpreter
//! Layer 0: sigil_foundation — Value model, sequences, errors, primitives
//! ```

pub use sigil_foundation as foundation;
pub use sigil_language as language;
pub use sigil_runtime as runtime;
