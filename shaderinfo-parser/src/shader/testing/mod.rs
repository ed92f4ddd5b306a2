//! Testing utilities for layout assertions
//!
//!     Parser tests should check whole records, not just counts. The fluent API here walks a
//!     parsed layout list and panics with a contextual message on the first mismatch:
//!
//!     ```rust,ignore
//!     use shaderinfo_parser::shader::testing::{assert_layouts, Fixture};
//!
//!     let info = Fixture::new("ubo_std140.glsl").parse();
//!     assert_layouts(info.layouts()).count(1).layout(0, |layout| {
//!         layout
//!             .layout_type(LayoutType::UniformBuffer)
//!             .name("Camera")
//!             .option("binding", 0)
//!             .member_count(3)
//!             .member(0, |m| m.type_name("mat4").name("view").scalar());
//!     });
//!     ```
//!
//!     Sample shaders live in `tests/fixtures` and are reached through [Fixture], so that the
//!     same vetted sources serve every test.

mod assertions;
mod fixtures;

pub use assertions::{LayoutAssertion, LayoutsAssertion, VariableAssertion};
pub use fixtures::Fixture;

use crate::shader::ast::Layout;

/// Create an assertion builder for a parsed layout list
pub fn assert_layouts(layouts: &[Layout]) -> LayoutsAssertion<'_> {
    LayoutsAssertion { layouts }
}
