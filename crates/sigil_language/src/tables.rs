//! The process-wide tables: code page, command table, transformer table.
//!
//! All three are built once by [`Tables::new`] at process start and never
//! mutated. Construction validates everything the tables guarantee
//! (256 distinct code-page symbols, unique well-formed tokens, disjoint
//! key spaces); any violation is a fatal `MalformedTable` error: the build
//! is defective, so the system refuses to start rather than degrade.

use sigil_foundation::{Error, Result};

use crate::codepage::CodePage;
use crate::command::Command;
use crate::commands::{self, CommandSet};
use crate::lexer::EXTENSION_PREFIXES;
use crate::transform::{Transformer, TransformerSet};

/// The immutable table bundle the driver consults for every token.
pub struct Tables {
    codepage: CodePage,
    commands: CommandSet,
    transformers: TransformerSet,
}

impl Tables {
    /// Builds and validates the tables.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTable` for duplicate tokens, malformed token
    /// shapes, overlapping command/transformer key spaces, or a defective
    /// code page.
    pub fn new() -> Result<Self> {
        let codepage = CodePage::new()?;
        let commands = commands::build()?;
        let transformers = TransformerSet::new()?;

        for token in transformers.tokens() {
            if commands.contains(token) {
                return Err(Error::malformed_table(format!(
                    "token {token:?} registered as both command and transformer"
                )));
            }
        }
        for token in commands.tokens().chain(transformers.tokens()) {
            validate_token_shape(&codepage, token)?;
        }

        Ok(Self {
            codepage,
            commands,
            transformers,
        })
    }

    /// The code page.
    #[must_use]
    pub fn codepage(&self) -> &CodePage {
        &self.codepage
    }

    /// Exact-match command lookup. No prefix matching happens here; the
    /// lexer resolves extension prefixes before tokens reach this layer.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&Command> {
        self.commands.get(token)
    }

    /// Exact-match transformer lookup.
    #[must_use]
    pub fn transformer(&self, token: &str) -> Option<&Transformer> {
        self.transformers.get(token)
    }

    /// Whether the token is a transformer.
    #[must_use]
    pub fn is_transformer(&self, token: &str) -> bool {
        self.transformers.contains(token)
    }

    /// How many function values the transformer grabs (1 when unknown).
    #[must_use]
    pub fn transformer_operands(&self, token: &str) -> u8 {
        self.transformers.get(token).map_or(1, |t| t.operands)
    }

    /// Every registered command token (for table-wide property tests).
    pub fn command_tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.tokens()
    }
}

// A token is one code-page symbol, or two where the first is an extension
// prefix.
fn validate_token_shape(codepage: &CodePage, token: &str) -> Result<()> {
    let symbols: Vec<char> = token.chars().collect();
    let well_formed = match symbols.as_slice() {
        [one] => codepage.contains(*one),
        [first, second] => {
            EXTENSION_PREFIXES.contains(first)
                && codepage.contains(*first)
                && codepage.contains(*second)
        }
        _ => false,
    };
    if well_formed {
        Ok(())
    } else {
        Err(Error::malformed_table(format!(
            "token {token:?} is not a well-formed code-page token"
        )))
    }
}
