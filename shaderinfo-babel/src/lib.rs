//! Output formats for shader layout metadata
//!
//!     This crate renders the layout list produced by `shaderinfo-parser` for humans and for
//!     other tools. It is a pure lib: no code here prints, reads the environment or exits.
//!
//!     - Format trait: uniform interface for all formats
//!     - FormatRegistry: discovery and selection by name
//!     - formats/<name>: one module per format
//!
//!     .
//!     ├── error.rs
//!     ├── format.rs       # Format trait definition
//!     ├── registry.rs     # FormatRegistry
//!     └── formats
//!         ├── text        # Indented console listing
//!         ├── json
//!         └── yaml

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
