//! Token definitions for shader sources
//!
//! The tokenizer only needs to be precise around `layout(...)` declarations, so the token set
//! is deliberately small: a handful of keywords, the punctuation that the layout grammar uses,
//! and catch-all identifier / numeric / operator kinds for everything else.
//!
//! Classification happens in a single left-to-right pass with no backtracking:
//!
//!     - a letter starts a word of letters, digits and underscores; keywords win over identifiers
//!     - a digit starts a numeric run of digits, `.`, `x`, `X` and `f`, kept verbatim
//!     - whitespace is skipped
//!     - every other character is a single-character token (punctuation or generic operator)
//!
//! Every character of the input ends up in exactly one token or in skipped whitespace, so the
//! tokenizer has no failure mode.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All token kinds that can be produced from a shader source
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub enum TokenKind {
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Identifier,

    // Hex and float shaped lexemes are not told apart here
    #[regex(r"[0-9][0-9.xXf]*")]
    Numeric,

    #[regex(r"[^A-Za-z0-9 \t\r\n\x0B\x0C()#=,;{}\[\]]")]
    Operator,

    // Keywords
    #[token("layout")]
    Layout,
    #[token("in")]
    In,
    #[token("out")]
    Out,
    #[token("uniform")]
    Uniform,
    #[token("buffer")]
    Buffer,
    #[token("readonly")]
    #[token("writeonly")]
    MemoryQualifier,

    // Punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("#")]
    PoundSign,
    #[token("=")]
    EqualSign,
    #[token(",")]
    Comma,
    #[token(";")]
    SemiColon,
    #[token("{")]
    OpenCurly,
    #[token("}")]
    CloseCurly,
    #[token("[")]
    OpenSquare,
    #[token("]")]
    CloseSquare,

    /// Never produced by the tokenizer
    Invalid,
}

impl TokenKind {
    /// Human readable name used in diagnostics
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Numeric => "numeric literal",
            TokenKind::Operator => "operator",
            TokenKind::Layout => "layout",
            TokenKind::In => "in",
            TokenKind::Out => "out",
            TokenKind::Uniform => "uniform",
            TokenKind::Buffer => "buffer",
            TokenKind::MemoryQualifier => "memory qualifier",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::PoundSign => "#",
            TokenKind::EqualSign => "=",
            TokenKind::Comma => ",",
            TokenKind::SemiColon => ";",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenSquare => "[",
            TokenKind::CloseSquare => "]",
            TokenKind::Invalid => "invalid token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified piece of source text
///
/// Tokens are produced once by [`tokenize`](crate::shader::lexing::tokenize) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line of the first character
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` (line {})", self.kind, self.lexeme, self.line)
    }
}
