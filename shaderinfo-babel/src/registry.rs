//! Output format lookup by name

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{json::JsonFormat, text::TextFormat, yaml::YamlFormat};
use shaderinfo_parser::shader::Layout;
use std::collections::BTreeMap;

/// The built-in output formats, keyed by name
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let text = registry.serialize(info.layouts(), "text")?;
/// ```
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Registry holding `text`, `json` and `yaml`
    pub fn with_defaults() -> Self {
        let builtins: [Box<dyn Format>; 3] =
            [Box::new(TextFormat), Box::new(JsonFormat), Box::new(YamlFormat)];
        let formats = builtins
            .into_iter()
            .map(|format| (format.name().to_string(), format))
            .collect();
        FormatRegistry { formats }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// All formats, ordered by name
    pub fn formats(&self) -> impl Iterator<Item = &dyn Format> {
        self.formats.values().map(|f| f.as_ref())
    }

    /// Render layouts using the named format
    pub fn serialize(&self, layouts: &[Layout], format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(layouts)
    }
}
