//! Tokenization
//!
//! This module turns source text into the owned token list the parser walks over. It is the
//! only place that talks to the logos lexer.
//!
//! Line tracking
//!
//!     Logos hands back byte spans, but diagnostics are reported by line. Whitespace is skipped
//!     by the lexer itself, so the newlines between two tokens are counted from the gap between
//!     the previous span's end and the next span's start. Tokens never contain a newline.
//!
//! The input is expected to be fully materialized already, with includes resolved (see
//! [loader](crate::shader::loader)).

use crate::shader::token::{Token, TokenKind};
use logos::Logos;

/// Tokenize a shader source into an ordered, finite token list
///
/// Never fails: characters the lexer does not recognize still produce an
/// [`Operator`](TokenKind::Operator) token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    let mut line: u32 = 1;
    let mut scanned = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        line += count_newlines(&source[scanned..span.start]);
        scanned = span.start;

        let kind = result.unwrap_or(TokenKind::Operator);
        tokens.push(Token::new(kind, lexer.slice(), line));
    }

    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());

    tokens
}

fn count_newlines(text: &str) -> u32 {
    text.bytes().filter(|b| *b == b'\n').count() as u32
}
