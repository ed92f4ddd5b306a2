//! Diagnostic reporting
//!
//! Parse and load failures are returned as structured errors, and are also reported to a
//! [`DiagnosticSink`] so that embedders decide where messages go. The default sink forwards to
//! the `log` facade; tests and tools that want to inspect messages use [`CollectingSink`].

use crate::shader::error::{LoaderError, ParseError};
use std::fmt;

/// Category used for diagnostics raised by the layout parser
pub const PARSER_CATEGORY: &str = "Shader Parser";
/// Category used for diagnostics raised while loading sources
pub const FILE_IO_CATEGORY: &str = "File IO";

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

impl DiagnosticSeverity {
    fn log_level(self) -> log::Level {
        match self {
            DiagnosticSeverity::Error => log::Level::Error,
            DiagnosticSeverity::Warning => log::Level::Warn,
            DiagnosticSeverity::Information => log::Level::Info,
            DiagnosticSeverity::Hint => log::Level::Debug,
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Information => write!(f, "info"),
            DiagnosticSeverity::Hint => write!(f, "hint"),
        }
    }
}

/// A single reported message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: String,
    pub severity: DiagnosticSeverity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        category: impl Into<String>,
        severity: DiagnosticSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            severity,
            message: message.into(),
        }
    }

    pub fn error(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(category, DiagnosticSeverity::Error, message)
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        Diagnostic::error(PARSER_CATEGORY, err.to_string())
    }
}

impl From<&LoaderError> for Diagnostic {
    fn from(err: &LoaderError) -> Self {
        Diagnostic::error(FILE_IO_CATEGORY, err.to_string())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}]: {}", self.category, self.severity, self.message)
    }
}

/// Receiver for diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade, using the category as the log target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::log!(
            target: diagnostic.category.as_str(),
            diagnostic.severity.log_level(),
            "{}",
            diagnostic.message
        );
    }
}

/// Keeps every diagnostic it receives
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::error::Expected;
    use crate::shader::token::TokenKind;

    #[test]
    fn test_parse_error_becomes_parser_diagnostic() {
        let err = ParseError::UnexpectedEof {
            expected: Expected::One(TokenKind::Identifier),
        };
        let diagnostic = Diagnostic::from(&err);

        assert_eq!(diagnostic.category, PARSER_CATEGORY);
        assert_eq!(diagnostic.severity, DiagnosticSeverity::Error);
        assert_eq!(
            diagnostic.to_string(),
            "[Shader Parser] [error]: Unexpected token: expected identifier got EOF"
        );
    }

    #[test]
    fn test_collecting_sink_keeps_order() {
        let mut sink = CollectingSink::new();
        sink.report(Diagnostic::error("a", "first"));
        sink.report(Diagnostic::new("b", DiagnosticSeverity::Warning, "second"));

        let messages: Vec<_> = sink.diagnostics().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
