//! YAML output via serde_yaml

use crate::error::FormatError;
use crate::format::Format;
use shaderinfo_parser::shader::Layout;

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML sequence of layouts"
    }

    fn serialize(&self, layouts: &[Layout]) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(layouts)?)
    }
}
