//! Parser: raw tokens to elements.
//!
//! The parser resolves lambda nesting, attaches the element(s) a
//! transformer grabs, and validates every command token against the
//! tables: an unregistered token is a load-time error, not a runtime one.

use sigil_foundation::{DefinedFn, Error, Result, Value};

use crate::ast::{Element, Lambda, Program};
use crate::lexer::Lexer;
use crate::tables::Tables;
use crate::token::{Token, TokenKind};

/// Parses a complete program.
///
/// # Errors
///
/// Returns a parse error for malformed structure (stray `;`, transformer at
/// end of input) and [`sigil_foundation::ErrorKind::UnknownToken`] for a
/// token neither table registers.
pub fn parse(source: &str, tables: &Tables) -> Result<Program> {
    let mut lambdas = Vec::new();
    let elements = parse_into(source, tables, &mut lambdas)?;
    Ok(Program { elements, lambdas })
}

/// Parses a source fragment, appending new lambdas to an existing table.
///
/// REPL sessions accumulate lambdas across fragments this way, so function
/// values left on the stack keep resolving after their line is gone.
///
/// # Errors
///
/// As [`parse`].
pub fn parse_into(
    source: &str,
    tables: &Tables,
    lambdas: &mut Vec<Lambda>,
) -> Result<Vec<Element>> {
    let tokens = Lexer::tokenize_all(source)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        tables,
        lambdas,
    };
    let elements = parser.parse_elements(false)?;
    if parser.pos < parser.tokens.len() {
        let token = &parser.tokens[parser.pos];
        return Err(Error::parse("unmatched `;`", token.position));
    }
    Ok(elements)
}

struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    tables: &'a Tables,
    lambdas: &'a mut Vec<Lambda>,
}

impl Parser<'_> {
    fn parse_elements(&mut self, in_lambda: bool) -> Result<Vec<Element>> {
        let mut elements = Vec::new();
        while let Some(token) = self.tokens.get(self.pos).cloned() {
            if token.kind == TokenKind::LambdaClose {
                if in_lambda {
                    self.pos += 1;
                }
                // A stray close at top level is reported by the caller.
                return Ok(elements);
            }
            elements.push(self.parse_element(&token)?);
        }
        Ok(elements)
    }

    fn parse_element(&mut self, token: &Token) -> Result<Element> {
        self.pos += 1;
        match &token.kind {
            TokenKind::Number(text) => Ok(Element::Literal(parse_number(text, token.position)?)),
            TokenKind::Str(text) => Ok(Element::Literal(Value::from(text.as_str()))),
            TokenKind::LambdaOpen => {
                let f = self.parse_lambda(token.position)?;
                Ok(Element::Lambda(f))
            }
            TokenKind::Bar => Err(Error::parse("`|` outside a lambda header", token.position)),
            TokenKind::LambdaClose => {
                Err(Error::parse("unmatched `;`", token.position))
            }
            TokenKind::Glyph(tok) => {
                if self.tables.is_transformer(tok) {
                    self.parse_transform(tok, token.position)
                } else if self.tables.lookup(tok).is_some() {
                    Ok(Element::Command(tok.clone()))
                } else {
                    Err(Error::unknown_token(tok.clone()))
                }
            }
            TokenKind::Eof => Err(Error::parse("unexpected end of input", token.position)),
        }
    }

    // λ [digits |] body ;
    fn parse_lambda(&mut self, position: usize) -> Result<DefinedFn> {
        let mut arity = 1u8;
        if let (Some(TokenKind::Number(digits)), Some(TokenKind::Bar)) = (
            self.tokens.get(self.pos).map(|t| &t.kind),
            self.tokens.get(self.pos + 1).map(|t| &t.kind),
        ) {
            arity = digits
                .parse::<u8>()
                .map_err(|_| Error::parse("lambda arity out of range", position))?;
            self.pos += 2;
        }
        let elements = self.parse_elements(true)?;
        Ok(self.add_lambda(Lambda {
            elements,
            arity,
            synthetic: false,
        }))
    }

    // A transformer grabs the next element (two for the parallel forms),
    // each wrapped as a function value.
    fn parse_transform(&mut self, token: &str, position: usize) -> Result<Element> {
        let count = self.tables.transformer_operands(token);
        let mut funcs = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            let Some(next) = self.tokens.get(self.pos).cloned() else {
                return Err(Error::parse(
                    format!("transformer {token:?} at end of input"),
                    position,
                ));
            };
            if next.kind == TokenKind::LambdaClose {
                return Err(Error::parse(
                    format!("transformer {token:?} with no operand"),
                    next.position,
                ));
            }
            let element = self.parse_element(&next)?;
            funcs.push(self.wrap_as_function(element));
        }
        Ok(Element::Transform {
            token: token.to_string(),
            funcs,
        })
    }

    // An element that is already a lambda is used directly; anything else
    // becomes a one-element lambda whose arity comes from the wrapped
    // command.
    fn wrap_as_function(&mut self, element: Element) -> DefinedFn {
        match element {
            Element::Lambda(f) => f,
            other => {
                let arity = match &other {
                    Element::Command(tok) => {
                        self.tables.lookup(tok).map_or(1, crate::command::Command::arity)
                    }
                    _ => 0,
                };
                self.add_lambda(Lambda {
                    elements: vec![other],
                    arity,
                    synthetic: true,
                })
            }
        }
    }

    fn add_lambda(&mut self, lambda: Lambda) -> DefinedFn {
        let arity = lambda.arity;
        let index = u32::try_from(self.lambdas.len()).unwrap_or(u32::MAX);
        self.lambdas.push(lambda);
        DefinedFn { index, arity }
    }
}

fn parse_number(text: &str, position: usize) -> Result<Value> {
    if text.contains('.') {
        text.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| Error::parse("malformed number literal", position))
    } else {
        text.parse::<i64>()
            .map(Value::Int)
            .or_else(|_| text.parse::<f64>().map(Value::Float))
            .map_err(|_| Error::parse("malformed number literal", position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Tables;

    fn tables() -> Tables {
        Tables::new().unwrap()
    }

    #[test]
    fn parses_literals_and_commands() {
        let program = parse("3 4+", &tables()).unwrap();
        assert_eq!(
            program.elements,
            vec![
                Element::Literal(Value::Int(3)),
                Element::Literal(Value::Int(4)),
                Element::Command("+".into()),
            ]
        );
    }

    #[test]
    fn unknown_token_is_load_time_error() {
        let err = parse("≬", &tables()).unwrap_err();
        assert!(matches!(
            err.kind,
            sigil_foundation::ErrorKind::UnknownToken(_)
        ));
    }

    #[test]
    fn parses_lambda_with_arity() {
        let program = parse("λ2|+;", &tables()).unwrap();
        assert_eq!(program.lambdas.len(), 1);
        assert_eq!(program.lambdas[0].arity, 2);
        assert!(matches!(program.elements[0], Element::Lambda(f) if f.arity == 2));
    }

    #[test]
    fn lambda_defaults_to_one_operand() {
        let program = parse("λ›;", &tables()).unwrap();
        assert_eq!(program.lambdas[0].arity, 1);
    }

    #[test]
    fn transformer_grabs_next_element() {
        let program = parse("v›", &tables()).unwrap();
        let Element::Transform { token, funcs } = &program.elements[0] else {
            panic!("expected transform element");
        };
        assert_eq!(token, "v");
        assert_eq!(funcs.len(), 1);
        // The wrapped increment command keeps its declared arity.
        assert_eq!(funcs[0].arity, 1);
    }

    #[test]
    fn parallel_transformer_grabs_two() {
        let program = parse("₌+-", &tables()).unwrap();
        let Element::Transform { funcs, .. } = &program.elements[0] else {
            panic!("expected transform element");
        };
        assert_eq!(funcs.len(), 2);
        assert_eq!(funcs[0].arity, 2);
    }

    #[test]
    fn stray_close_is_an_error() {
        assert!(parse(";", &tables()).is_err());
        assert!(parse("1;", &tables()).is_err());
    }

    #[test]
    fn transformer_at_end_is_an_error() {
        assert!(parse("v", &tables()).is_err());
    }
}
