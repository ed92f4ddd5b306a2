//! Shared configuration loader for the shaderinfo tools.
//!
//! `defaults/shaderinfo.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. Callers layer user files and command-line
//! overrides on top of them via [`Loader`] before deserializing into [`ShaderInfoConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use log::LevelFilter;
use serde::Deserialize;
use shaderinfo_parser::shader::SourceLoader;
use std::path::Path;

pub use config::ConfigError as Error;

const DEFAULT_TOML: &str = include_str!("../defaults/shaderinfo.default.toml");

/// Top-level configuration consumed by the shaderinfo tools.
#[derive(Debug, Clone, Deserialize)]
pub struct ShaderInfoConfig {
    pub loader: LoaderConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Include resolution settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderConfig {
    pub include_keyword: String,
    pub max_include_depth: usize,
}

impl LoaderConfig {
    pub fn source_loader(&self) -> SourceLoader {
        SourceLoader::new(self.include_keyword.as_str()).with_max_depth(self.max_include_depth)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered output format
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter, used when `RUST_LOG` is unset. Unknown level names fail the build.
    pub level: LevelFilter,
}

/// File name looked up in the working directory by [`Loader::with_local_file`]
pub const LOCAL_CONFIG_FILE: &str = "shaderinfo.toml";

/// Builds a [`ShaderInfoConfig`] from the embedded defaults plus user layers
///
/// Layers apply in call order; a later layer wins for every key it sets.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// `shaderinfo.toml` in the working directory, if there is one
    pub fn with_local_file(self) -> Self {
        self.layer(Path::new(LOCAL_CONFIG_FILE), false)
    }

    /// A TOML file that must exist; a missing file fails [`Loader::build`]
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Set one dotted key, e.g. `output.format` from `--format`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ShaderInfoConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ShaderInfoConfig, ConfigError> {
    Loader::new().build()
}
