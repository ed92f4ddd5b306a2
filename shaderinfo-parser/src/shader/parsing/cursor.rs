//! Forward-only traversal of a token list

use crate::shader::error::{Expected, ParseError, ParseResult};
use crate::shader::token::{Token, TokenKind};

/// Position into an immutable token array
///
/// Tokens are consumed one at a time through the `expect` family. A token that has been
/// consumed is never looked at again, and a failed expectation leaves the position untouched.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    next: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor whose next unconsumed token is `tokens[start]`
    pub fn new(tokens: &'a [Token], start: usize) -> Self {
        Self {
            tokens,
            next: start.min(tokens.len()),
        }
    }

    /// Index of the next unconsumed token
    pub fn position(&self) -> usize {
        self.next
    }

    /// Consume the next token if it has the given kind
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<&'a Token> {
        self.expect_any(&[kind])
    }

    /// Consume the next token if its kind is one of `kinds`
    pub fn expect_any(&mut self, kinds: &[TokenKind]) -> ParseResult<&'a Token> {
        let Some(token) = self.tokens.get(self.next) else {
            return Err(ParseError::UnexpectedEof {
                expected: Expected::from(kinds),
            });
        };

        if !kinds.contains(&token.kind) {
            return Err(ParseError::UnexpectedToken {
                expected: Expected::from(kinds),
                found: token.kind,
                line: token.line,
            });
        }

        self.next += 1;
        log::trace!("consumed {}", token);
        Ok(token)
    }
}
