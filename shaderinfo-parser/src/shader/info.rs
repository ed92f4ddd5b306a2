//! Per-shader aggregate
//!
//! [`ShaderInfo`] owns the token list of one source and the layouts extracted from it.
//!
//! ```text
//! let mut info = ShaderInfo::new();
//! info.parse(&source)?;
//! for layout in info.layouts() {
//!     println!("{} {}", layout.layout_type, layout.name);
//! }
//! ```
//!
//! Parsing is all or nothing per call: the first malformed declaration stops the scan and its
//! error is returned. Layouts completed before it stay available through [`ShaderInfo::layouts`].

use crate::shader::ast::Layout;
use crate::shader::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::shader::error::ParseResult;
use crate::shader::lexing::tokenize;
use crate::shader::parsing::{parse_layout, Cursor};
use crate::shader::token::{Token, TokenKind};

/// Layout metadata extracted from one shader source
#[derive(Debug, Clone, Default)]
pub struct ShaderInfo {
    tokens: Vec<Token>,
    layouts: Vec<Layout>,
}

impl ShaderInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a source, reporting failures through the `log` facade
    pub fn parse(&mut self, source: &str) -> ParseResult<()> {
        self.parse_with_sink(source, &mut LogSink)
    }

    /// Parse a source, reporting failures to `sink`
    ///
    /// Any state left by a previous call is replaced.
    pub fn parse_with_sink(
        &mut self,
        source: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> ParseResult<()> {
        self.tokens = tokenize(source);
        self.layouts.clear();

        let mut index = 0;
        while index < self.tokens.len() {
            if !self.tokens[index].is(TokenKind::Layout) {
                index += 1;
                continue;
            }

            let mut cursor = Cursor::new(&self.tokens, index + 1);
            match parse_layout(&mut cursor) {
                Ok(layout) => {
                    log::debug!(
                        "line {}: {} `{}`",
                        self.tokens[index].line,
                        layout.layout_type,
                        layout.name
                    );
                    self.layouts.push(layout);
                    index = cursor.position();
                }
                Err(err) => {
                    sink.report(Diagnostic::from(&err));
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn layouts_mut(&mut self) -> &mut Vec<Layout> {
        &mut self.layouts
    }

    pub fn into_layouts(self) -> Vec<Layout> {
        self.layouts
    }

    /// Tokens of the last parsed source
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
