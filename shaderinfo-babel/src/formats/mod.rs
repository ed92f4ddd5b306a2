//! Built-in output formats

pub mod json;
pub mod text;
pub mod yaml;
