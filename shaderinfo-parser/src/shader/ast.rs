//! Layout records
//!
//! A [`Layout`] describes one `layout(...)` declaration. Records are built by the layout
//! parser and are only handed out once complete, so a [`LayoutType::Invalid`] never shows up
//! in a parsed result.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// The kind of interface a layout declaration annotates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum LayoutType {
    /// `uniform` block with the `std140` option
    UniformBuffer,
    /// `buffer` block
    ShaderStorageBuffer,
    AttribIn,
    AttribOut,
    Uniform,
    #[default]
    Invalid,
}

impl LayoutType {
    /// Descriptive label for display
    pub fn label(self) -> &'static str {
        match self {
            LayoutType::UniformBuffer => "Uniform Buffer",
            LayoutType::ShaderStorageBuffer => "Shader Storage Buffer",
            LayoutType::AttribIn => "Attribute In",
            LayoutType::AttribOut => "Attribute Out",
            LayoutType::Uniform => "Uniform",
            LayoutType::Invalid => "Invalid Type",
        }
    }

    /// Buffer blocks carry a `{ ... }` member list
    pub fn is_buffer_block(self) -> bool {
        matches!(
            self,
            LayoutType::UniformBuffer | LayoutType::ShaderStorageBuffer
        )
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Layout options in declaration order
///
/// Setting a key that is already present overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    entries: Vec<(String, i32)>,
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: i32) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

// Serialized as a map, keeping declaration order
impl Serialize for LayoutOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for LayoutOptions {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        let mut options = LayoutOptions::new();
        for (key, value) in iter {
            options.set(key, value);
        }
        options
    }
}

/// A member of a buffer block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub type_name: String,
    pub name: String,
    pub is_array: bool,
    /// Only meaningful when `is_array`; `-1` marks an unsized trailing array
    pub array_size: i32,
}

impl Variable {
    pub const UNSIZED: i32 = -1;

    pub fn scalar(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            is_array: false,
            array_size: 0,
        }
    }

    pub fn array(type_name: impl Into<String>, name: impl Into<String>, size: i32) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            is_array: true,
            array_size: size,
        }
    }

    pub fn unsized_array(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self::array(type_name, name, Self::UNSIZED)
    }

    pub fn size(&self) -> ArraySize {
        match (self.is_array, self.array_size) {
            (false, _) => ArraySize::Scalar,
            (true, Self::UNSIZED) => ArraySize::Unsized,
            (true, n) => ArraySize::Fixed(n),
        }
    }
}

/// Typed view over `Variable::is_array` / `Variable::array_size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArraySize {
    Scalar,
    Fixed(i32),
    Unsized,
}

/// One parsed `layout(...)` declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    #[serde(rename = "type")]
    pub layout_type: LayoutType,
    pub options: LayoutOptions,
    pub memory_qualifiers: Vec<String>,
    pub name: String,
    /// Interface type for attributes and plain uniforms; empty for buffer blocks
    pub type_qualifier: String,
    /// Instance name following a buffer block's closing brace, if any
    pub instance_name: Option<String>,
    /// Members, only populated for buffer blocks
    pub body: Vec<Variable>,
}

impl Layout {
    pub fn is_buffer_block(&self) -> bool {
        self.layout_type.is_buffer_block()
    }

    pub fn option(&self, key: &str) -> Option<i32> {
        self.options.get(key)
    }

    /// The `binding` option, if declared
    pub fn binding(&self) -> Option<i32> {
        self.option("binding")
    }

    /// The `location` option, if declared
    pub fn location(&self) -> Option<i32> {
        self.option("location")
    }
}
