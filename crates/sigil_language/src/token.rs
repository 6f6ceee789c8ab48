//! Raw tokens produced by the lexer.

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Byte offset of the token's first symbol in the source.
    pub position: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Token types for Sigil source.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Numeric literal: a digit run, optionally with a decimal point.
    Number(String),
    /// Text literal: `` `…` `` (backtick-delimited) or `‛xy` (two symbols).
    Str(String),
    /// `λ`, opening a lambda body.
    LambdaOpen,
    /// `;`, closing a lambda body.
    LambdaClose,
    /// `|`, separating a lambda's arity digits from its body.
    Bar,
    /// A command or transformer token (one symbol, or two under an
    /// extension prefix).
    Glyph(String),
    /// End of input.
    Eof,
}
