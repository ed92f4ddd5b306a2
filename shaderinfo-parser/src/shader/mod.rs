//! Main module for shader layout extraction

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod info;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod token;

pub use ast::{ArraySize, Layout, LayoutOptions, LayoutType, Variable};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSeverity, DiagnosticSink, LogSink};
pub use error::{Expected, LoaderError, ParseError, ParseResult};
pub use info::ShaderInfo;
pub use lexing::tokenize;
pub use loader::SourceLoader;
pub use token::{Token, TokenKind};
