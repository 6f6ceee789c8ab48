//! The command table.
//!
//! Every supported token is registered exactly once, each entry built via
//! the arity-bound operation compiler ([`crate::command::Command`]). Most
//! entries wrap a primitive from `sigil_foundation::ops` with the slots
//! passed in declared order; entries with non-uniform stack shape (variable
//! result count, conditional pushes, direct stack-structure manipulation)
//! use bespoke templates.
//!
//! Registration is split by family, mirroring the namespaces the extension
//! prefixes carve out:
//! - `stack`: stack-structure commands
//! - `arith`: arithmetic and bitwise commands
//! - `compare`: comparison commands
//! - `logic`: truthiness and predicate commands
//! - `iter`: sequence commands
//! - `string`: text commands
//! - `math_ext`: the `∆` namespace (trigonometry, number theory)
//! - `string_ext`: the `ø` namespace
//! - `list_ext`: the `Þ` namespace (lists and matrices)
//! - `meta`: the `¨` namespace plus register/global-stack/context/IO
//! - `constants`: zero-arity constant pushers, including the `k` library

mod arith;
mod compare;
mod constants;
mod iter;
mod list_ext;
mod logic;
mod math_ext;
mod meta;
mod stack;
mod string;
mod string_ext;

use std::collections::HashMap;

use sigil_foundation::{Error, Result, Value};

use crate::command::{Command, Operands, Outcome};
use crate::interp::Interp;

/// The static token → command mapping.
pub struct CommandSet {
    entries: HashMap<&'static str, Command>,
}

impl CommandSet {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers a compiled command under a token.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` when the token is already registered.
    pub fn insert(&mut self, token: &'static str, command: Command) -> Result<()> {
        if self.entries.insert(token, command).is_some() {
            return Err(Error::malformed_table(format!(
                "duplicate command token {token:?}"
            )));
        }
        Ok(())
    }

    /// Registers a bespoke template.
    pub fn op(
        &mut self,
        token: &'static str,
        arity: u8,
        template: impl Fn(&mut Interp<'_>, Operands) -> Result<Outcome> + Send + Sync + 'static,
    ) -> Result<()> {
        self.insert(token, Command::new(arity, template))
    }

    /// Registers a one-operand primitive invocation.
    pub fn unary(&mut self, token: &'static str, f: fn(Value) -> Result<Value>) -> Result<()> {
        self.op(token, 1, move |_, operands| {
            f(operands.unary()).map(Outcome::One)
        })
    }

    /// Registers a one-operand primitive taking its operand by reference.
    pub fn unary_ref(
        &mut self,
        token: &'static str,
        f: fn(&Value) -> Result<Value>,
    ) -> Result<()> {
        self.op(token, 1, move |_, operands| {
            f(&operands.unary()).map(Outcome::One)
        })
    }

    /// Registers a two-operand primitive invocation; slots are passed in
    /// declared order (lhs = slot 2, rhs = slot 1).
    pub fn binary(
        &mut self,
        token: &'static str,
        f: fn(Value, Value) -> Result<Value>,
    ) -> Result<()> {
        self.op(token, 2, move |_, operands| {
            let (lhs, rhs) = operands.binary();
            f(lhs, rhs).map(Outcome::One)
        })
    }

    /// Registers a two-operand primitive taking operands by reference.
    pub fn binary_ref(
        &mut self,
        token: &'static str,
        f: fn(&Value, &Value) -> Result<Value>,
    ) -> Result<()> {
        self.op(token, 2, move |_, operands| {
            let (lhs, rhs) = operands.binary();
            f(&lhs, &rhs).map(Outcome::One)
        })
    }

    /// Registers a three-operand primitive taking operands by reference,
    /// in declared order (slot 3, slot 2, slot 1).
    pub fn ternary_ref(
        &mut self,
        token: &'static str,
        f: fn(&Value, &Value, &Value) -> Result<Value>,
    ) -> Result<()> {
        self.op(token, 3, move |_, operands| {
            let (first, second, third) = operands.ternary();
            f(&first, &second, &third).map(Outcome::One)
        })
    }

    /// Registers a zero-arity constant pusher.
    pub fn constant(&mut self, token: &'static str, f: fn() -> Value) -> Result<()> {
        self.op(token, 0, move |_, _| Ok(Outcome::One(f())))
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&Command> {
        self.entries.get(token)
    }

    /// Whether the token is registered.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Every registered token.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the full command table.
///
/// # Errors
///
/// Returns `MalformedTable` on any duplicate registration.
pub fn build() -> Result<CommandSet> {
    let mut set = CommandSet::new();
    stack::register(&mut set)?;
    arith::register(&mut set)?;
    compare::register(&mut set)?;
    logic::register(&mut set)?;
    iter::register(&mut set)?;
    string::register(&mut set)?;
    math_ext::register(&mut set)?;
    string_ext::register(&mut set)?;
    list_ext::register(&mut set)?;
    meta::register(&mut set)?;
    constants::register(&mut set)?;
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_builds_without_duplicates() {
        let set = build().unwrap();
        assert!(set.len() > 200, "table has {} entries", set.len());
    }

    #[test]
    fn duplicate_registration_is_malformed() {
        let mut set = CommandSet::new();
        set.constant("₀", || Value::Int(10)).unwrap();
        let err = set.constant("₀", || Value::Int(10)).unwrap_err();
        assert!(matches!(
            err.kind,
            sigil_foundation::ErrorKind::MalformedTable(_)
        ));
    }
}
