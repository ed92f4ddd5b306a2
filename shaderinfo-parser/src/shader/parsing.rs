//! Layout parsing
//!
//!     The parser never builds a general syntax tree. The driver in [info](crate::shader::info)
//!     scans the token list linearly and hands control to [parse_layout] whenever it meets a
//!     `layout` keyword. From there a small recursive-descent state machine consumes exactly
//!     one declaration:
//!
//!         Open        `(`
//!         Options     `key`, `key = N`, separated by `,`, closed by `)`
//!         Qualifiers  memory qualifiers, then one of in / out / uniform / buffer, then names
//!         Body        `{ type name; type name[N]; type name[]; }` instance? `;`
//!                     (buffer blocks only)
//!
//!     Traversal goes through a [Cursor]: an index into the owned token array that only ever
//!     moves forward. Every state asks the cursor for the next token with an expectation of
//!     its kind; the first unmet expectation is returned as a [ParseError](crate::shader::ParseError)
//!     and aborts the whole parse.

pub mod cursor;
pub mod layout;

pub use cursor::Cursor;
pub use layout::parse_layout;
