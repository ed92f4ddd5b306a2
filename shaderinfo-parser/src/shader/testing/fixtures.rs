//! Access to the sample shaders under `tests/fixtures`

use crate::shader::diagnostics::CollectingSink;
use crate::shader::error::ParseError;
use crate::shader::info::ShaderInfo;
use crate::shader::loader::SourceLoader;
use std::fs;
use std::path::PathBuf;

/// A sample shader by file name
#[derive(Debug, Clone)]
pub struct Fixture {
    name: String,
}

impl Fixture {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    pub fn path(&self) -> PathBuf {
        Self::dir().join(&self.name)
    }

    /// Raw file contents, includes left as written
    pub fn source(&self) -> String {
        fs::read_to_string(self.path())
            .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", self.name, e))
    }

    /// File contents with includes inlined
    pub fn load(&self) -> String {
        SourceLoader::default()
            .load(self.path())
            .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", self.name, e))
    }

    /// Load and parse, panicking on any failure
    pub fn parse(&self) -> ShaderInfo {
        let mut info = ShaderInfo::new();
        info.parse(&self.load())
            .unwrap_or_else(|e| panic!("Fixture {} failed to parse: {}", self.name, e));
        info
    }

    /// Load and parse a fixture that is expected to fail
    pub fn parse_err(&self) -> (ShaderInfo, ParseError) {
        let mut info = ShaderInfo::new();
        let mut sink = CollectingSink::new();
        match info.parse_with_sink(&self.load(), &mut sink) {
            Ok(()) => panic!("Fixture {} parsed but was expected to fail", self.name),
            Err(err) => (info, err),
        }
    }
}
