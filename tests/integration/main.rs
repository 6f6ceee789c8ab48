//! Cross-layer integration tests for Sigil
//!
//! Tests that verify correct interaction between multiple crates.

mod golf;
mod session;
