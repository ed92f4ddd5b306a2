//! JSON output via serde_json

use crate::error::FormatError;
use crate::format::Format;
use shaderinfo_parser::shader::Layout;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON array of layouts"
    }

    fn serialize(&self, layouts: &[Layout]) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(layouts)?;
        out.push('\n');
        Ok(out)
    }
}
