//! Format trait definition

use crate::error::FormatError;
use shaderinfo_parser::shader::Layout;

/// Trait for layout output formats
///
/// # Examples
///
/// ```ignore
/// struct CountFormat;
///
/// impl Format for CountFormat {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn description(&self) -> &str {
///         "Number of layouts"
///     }
///
///     fn serialize(&self, layouts: &[Layout]) -> Result<String, FormatError> {
///         Ok(format!("{}\n", layouts.len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "text", "json")
    fn name(&self) -> &str;

    /// One-line summary shown when listing formats
    fn description(&self) -> &str;

    /// Render a layout list
    fn serialize(&self, layouts: &[Layout]) -> Result<String, FormatError>;
}
