//! Error types for tokenization, parsing and source loading

use crate::shader::token::TokenKind;
use std::fmt;
use std::path::PathBuf;

/// What the parser was looking for when it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    One(TokenKind),
    AnyOf(Vec<TokenKind>),
}

impl From<&[TokenKind]> for Expected {
    fn from(kinds: &[TokenKind]) -> Self {
        match kinds {
            [single] => Expected::One(*single),
            _ => Expected::AnyOf(kinds.to_vec()),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::One(kind) => write!(f, "{}", kind),
            Expected::AnyOf(kinds) => {
                let labels: Vec<_> = kinds.iter().map(|k| k.label()).collect();
                write!(f, "one of {}", labels.join(", "))
            }
        }
    }
}

/// Errors that abort the parse of a shader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The next token has a kind the grammar does not accept here
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        line: u32,
    },
    /// The token list ran out while a token was still required
    UnexpectedEof { expected: Expected },
    /// A numeric literal that is not a plain decimal `i32`
    InvalidNumber { lexeme: String, line: u32 },
}

impl ParseError {
    /// Source line of the offending token, if there is one
    pub fn line(&self) -> Option<u32> {
        match self {
            ParseError::UnexpectedToken { line, .. } | ParseError::InvalidNumber { line, .. } => {
                Some(*line)
            }
            ParseError::UnexpectedEof { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                expected,
                found,
                line,
            } => write!(
                f,
                "Unexpected token: expected {} got {} (line {})",
                expected, found, line
            ),
            ParseError::UnexpectedEof { expected } => {
                write!(f, "Unexpected token: expected {} got EOF", expected)
            }
            ParseError::InvalidNumber { lexeme, line } => write!(
                f,
                "Invalid numeric literal: `{}` is not a decimal integer (line {})",
                lexeme, line
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parser results
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while loading and inlining shader sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// A file (top-level or included) could not be read
    Io { path: PathBuf, message: String },
    /// Include nesting went past the configured limit, usually an include cycle
    IncludeDepth { path: PathBuf, limit: usize },
    /// A line carries the include keyword but no file reference
    MalformedInclude { path: PathBuf, line: usize },
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Io { path, message } => {
                write!(f, "Failed to load file {}: {}", path.display(), message)
            }
            LoaderError::IncludeDepth { path, limit } => write!(
                f,
                "Include depth limit of {} exceeded while loading {}",
                limit,
                path.display()
            ),
            LoaderError::MalformedInclude { path, line } => write!(
                f,
                "Malformed include directive in {} (line {})",
                path.display(),
                line
            ),
        }
    }
}

impl std::error::Error for LoaderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_message() {
        let err = ParseError::UnexpectedToken {
            expected: Expected::One(TokenKind::OpenParen),
            found: TokenKind::Identifier,
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected token: expected ( got identifier (line 7)"
        );
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_eof_message_has_no_line() {
        let err = ParseError::UnexpectedEof {
            expected: Expected::AnyOf(vec![TokenKind::Comma, TokenKind::CloseParen]),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected token: expected one of ,, ) got EOF"
        );
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_expected_from_slice() {
        assert_eq!(
            Expected::from(&[TokenKind::SemiColon][..]),
            Expected::One(TokenKind::SemiColon)
        );
        assert_eq!(
            Expected::from(&[TokenKind::SemiColon, TokenKind::Identifier][..]),
            Expected::AnyOf(vec![TokenKind::SemiColon, TokenKind::Identifier])
        );
    }
}
