//! Parsed program form.
//!
//! The parser lowers raw tokens into elements, the interpreter's
//! instruction form. Lambda bodies are hoisted into a program-level lambda
//! table so function values are plain `(index, arity)` references.

use sigil_foundation::{DefinedFn, Value};

/// One executable unit of a parsed program.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Pushes a literal value.
    Literal(Value),
    /// Executes a command from the command table.
    Command(String),
    /// Pushes a function value referencing the lambda table.
    Lambda(DefinedFn),
    /// Applies a transformer to one or two grabbed function values.
    Transform {
        /// The transformer token.
        token: String,
        /// The grabbed function value(s), in source order.
        funcs: Vec<DefinedFn>,
    },
}

/// A lambda body in the lambda table.
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    /// The body's elements.
    pub elements: Vec<Element>,
    /// Declared operand count (defaults to 1).
    pub arity: u8,
    /// True for the one-element wrappers the parser creates around an
    /// element a transformer grabbed. Synthetic wrappers are not functions
    /// the program wrote: conditional application runs them inline on the
    /// caller's stack, and recursion resolution skips their frames.
    pub synthetic: bool,
}

/// A parsed program: top-level elements plus the lambda table they
/// reference.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    /// Top-level elements, in source order.
    pub elements: Vec<Element>,
    /// Lambda bodies, indexed by [`DefinedFn::index`].
    pub lambdas: Vec<Lambda>,
}
