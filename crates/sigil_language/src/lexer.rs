//! Lexer for Sigil source.
//!
//! The lexer converts code-page text into a stream of raw tokens. It owns
//! the two-symbol prefix rule: a symbol in [`EXTENSION_PREFIXES`] always
//! consumes the following symbol to form one extended token, so downstream
//! layers never see partial or ambiguous tokens.

use sigil_foundation::{Error, Result};

use crate::token::{Token, TokenKind};

/// The extension-prefix symbols, each opening a named sub-namespace:
/// `∆` math/number theory, `ø` text, `Þ` lists/matrices, `¨` meta,
/// `k` the constant library.
pub const EXTENSION_PREFIXES: [char; 5] = ['∆', 'ø', 'Þ', '¨', 'k'];

/// Lexer for Sigil source code.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
        }
    }

    /// Tokenizes the entire source.
    ///
    /// # Errors
    ///
    /// Returns a parse error for an extension prefix with no following
    /// symbol.
    pub fn tokenize_all(source: &'src str) -> Result<Vec<Token>> {
        let mut lexer = Self::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            if token.kind == TokenKind::Eof {
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_separators();

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Ok(Token::new(TokenKind::Eof, start));
        };

        let kind = match c {
            '0'..='9' => self.scan_number(),
            '`' => self.scan_string(),
            '‛' => self.scan_two_symbol_string(),
            'λ' => {
                self.advance();
                TokenKind::LambdaOpen
            }
            ';' => {
                self.advance();
                TokenKind::LambdaClose
            }
            '|' => {
                self.advance();
                TokenKind::Bar
            }
            c if EXTENSION_PREFIXES.contains(&c) => {
                self.advance();
                let Some(second) = self.peek_char() else {
                    return Err(Error::parse(
                        format!("extension prefix {c:?} at end of input"),
                        start,
                    ));
                };
                self.advance();
                TokenKind::Glyph(format!("{c}{second}"))
            }
            c => {
                self.advance();
                TokenKind::Glyph(c.to_string())
            }
        };

        Ok(Token::new(kind, start))
    }

    // Space and newline separate adjacent tokens (most importantly, two
    // number literals) and are otherwise insignificant.
    fn skip_separators(&mut self) {
        while matches!(self.peek_char(), Some(' ' | '\n' | '\r')) {
            self.advance();
        }
    }

    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        while matches!(self.peek_char(), Some('0'..='9')) {
            self.advance();
        }
        // A decimal point must be followed by digits to belong to the number.
        if self.peek_char() == Some('.')
            && matches!(self.peek_second(), Some('0'..='9'))
        {
            self.advance();
            while matches!(self.peek_char(), Some('0'..='9')) {
                self.advance();
            }
        }
        TokenKind::Number(self.source[start..self.position].to_string())
    }

    // Backtick-delimited, with `\`` and `\\` escapes. An unterminated
    // literal runs to end of input.
    fn scan_string(&mut self) -> TokenKind {
        self.advance(); // opening backtick
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            self.advance();
            match c {
                '`' => break,
                '\\' => match self.peek_char() {
                    Some(escaped @ ('`' | '\\')) => {
                        self.advance();
                        text.push(escaped);
                    }
                    _ => text.push('\\'),
                },
                c => text.push(c),
            }
        }
        TokenKind::Str(text)
    }

    // `‛` takes the next two symbols verbatim as a text literal.
    fn scan_two_symbol_string(&mut self) -> TokenKind {
        self.advance(); // ‛
        let mut text = String::new();
        for _ in 0..2 {
            if let Some(c) = self.peek_char() {
                self.advance();
                text.push(c);
            }
        }
        TokenKind::Str(text)
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest.chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.position += len;
            self.rest = &self.rest[len..];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::tokenize_all(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn numbers_and_commands() {
        assert_eq!(
            kinds("3 4+"),
            vec![
                TokenKind::Number("3".into()),
                TokenKind::Number("4".into()),
                TokenKind::Glyph("+".into()),
            ]
        );
    }

    #[test]
    fn decimal_numbers() {
        assert_eq!(kinds("1.5"), vec![TokenKind::Number("1.5".into())]);
        // A trailing dot is not part of the number.
        assert_eq!(
            kinds("1."),
            vec![TokenKind::Number("1".into()), TokenKind::Glyph(".".into())]
        );
    }

    #[test]
    fn extension_prefixes_take_two_symbols() {
        assert_eq!(
            kinds("∆S kA"),
            vec![
                TokenKind::Glyph("∆S".into()),
                TokenKind::Glyph("kA".into()),
            ]
        );
    }

    #[test]
    fn dangling_prefix_is_an_error() {
        assert!(Lexer::tokenize_all("∆").is_err());
    }

    #[test]
    fn string_literals() {
        assert_eq!(kinds("`ab`"), vec![TokenKind::Str("ab".into())]);
        assert_eq!(kinds("`a\\`b`"), vec![TokenKind::Str("a`b".into())]);
        // Unterminated literals run to end of input.
        assert_eq!(kinds("`ab"), vec![TokenKind::Str("ab".into())]);
        assert_eq!(kinds("‛hi"), vec![TokenKind::Str("hi".into())]);
    }

    #[test]
    fn lambda_delimiters() {
        assert_eq!(
            kinds("λ2|+;"),
            vec![
                TokenKind::LambdaOpen,
                TokenKind::Number("2".into()),
                TokenKind::Bar,
                TokenKind::Glyph("+".into()),
                TokenKind::LambdaClose,
            ]
        );
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = Lexer::tokenize_all("∆S+").unwrap();
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, "∆S".len());
    }
}
