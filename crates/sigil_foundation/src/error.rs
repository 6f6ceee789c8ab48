//! Error types for the Sigil system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for Sigil operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an evaluation-stack underflow error.
    #[must_use]
    pub fn underflow(needed: usize, depth: usize) -> Self {
        Self::new(ErrorKind::Underflow { needed, depth })
    }

    /// Creates an unknown-token error.
    #[must_use]
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownToken(token.into()))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a malformed-table error.
    #[must_use]
    pub fn malformed_table(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedTable(detail.into()))
    }

    /// Creates a parse error at the given byte position.
    #[must_use]
    pub fn parse(message: impl Into<String>, position: usize) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            position,
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Popping more values than the evaluation stack holds.
    ///
    /// Raised before any operand is bound, so a failed operation never
    /// partially consumes the stack.
    #[error("stack underflow: needed {needed}, had {depth}")]
    Underflow {
        /// Number of operands the operation declared.
        needed: usize,
        /// Stack depth at the time of the attempt.
        depth: usize,
    },

    /// A token with no entry in the command or transformer table.
    #[error("unknown token: {0:?}")]
    UnknownToken(String),

    /// An operand's runtime kind does not support the requested operation.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Duplicate token or malformed code page detected at table construction.
    ///
    /// Fatal at process start: this is a construction-time defect, not a
    /// user-program defect.
    #[error("malformed table: {0}")]
    MalformedTable(String),

    /// Division (or modulo) by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: i64,
        /// The actual length of the sequence.
        length: usize,
    },

    /// A recursion or context command was used outside any function.
    #[error("no enclosing function")]
    NoEnclosingFunction,

    /// Parse error in program source.
    #[error("parse error at byte {position}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Byte offset in the source.
        position: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The token whose operation raised the error.
    pub token: Option<String>,
    /// Stack of enclosing function invocations.
    pub frames: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offending token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Adds an enclosing invocation frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(token) = &self.token {
            write!(f, "at token {token:?}")?;
        }
        if !self.frames.is_empty() {
            writeln!(f)?;
            for frame in &self.frames {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_underflow() {
        let err = Error::underflow(2, 1);
        assert!(matches!(
            err.kind,
            ErrorKind::Underflow { needed: 2, depth: 1 }
        ));
        let msg = format!("{err}");
        assert!(msg.contains("underflow"));
    }

    #[test]
    fn error_type_mismatch() {
        let err = Error::type_mismatch(Type::Num, Type::Str);
        let msg = format!("{err}");
        assert!(msg.contains("number"));
        assert!(msg.contains("text"));
    }

    #[test]
    fn error_with_context() {
        let err = Error::unknown_token("∆z")
            .with_context(ErrorContext::new().with_token("∆z").with_frame("λ#0"));
        let ctx = err.context.unwrap();
        assert_eq!(ctx.token.as_deref(), Some("∆z"));
        assert_eq!(ctx.frames, vec!["λ#0".to_string()]);
    }

}
