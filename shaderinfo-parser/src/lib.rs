//! # shaderinfo-parser
//!
//! Extracts interface metadata from GLSL-style shader sources: buffer bindings, attribute
//! locations, uniform blocks and their member layouts.
//!
//! Only `layout(...)` declarations are understood. Everything else in the shader (functions,
//! expressions, control flow) is tokenized and then skipped, so no full compiler front end is
//! needed.
//!
//! File Layout
//!
//!     src/shader
//!       ├── token.rs       Token kinds (logos) and the owned Token record
//!       ├── lexing.rs      Source text to token list
//!       ├── parsing/       Cursor primitives and the layout state machine
//!       ├── ast.rs         Layout, Variable and LayoutType
//!       ├── info.rs        ShaderInfo, the per-file aggregate
//!       ├── loader.rs      #include resolution before tokenization
//!       └── testing/       Fluent assertions for parser tests
//!
//! Data flows strictly left to right: loader → lexing → parsing → ShaderInfo.

pub mod shader;

pub use shader::{Layout, LayoutType, ParseError, ShaderInfo, Variable};
