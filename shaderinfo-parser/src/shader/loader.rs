//! Source loading with include resolution
//!
//! Shaders often pull shared declarations from other files. Before tokenization, every line
//! that mentions the include keyword (`#include` by default) is replaced with the contents of
//! the file it names, recursively:
//!
//! ```text
//! #include "common/bindings.glsl"
//! ```
//!
//! The reference is the second whitespace-separated word of the line with its surrounding
//! quotes removed, resolved against the directory of the including file. Every copied line is
//! terminated with `\n`, and a `\n` follows each inlined file.
//!
//! An included file that cannot be read is reported to the sink and replaced by an empty line,
//! so the rest of the shader still loads. Only an unreadable top-level file, a malformed
//! include line or a nesting deeper than the limit fails the load. Include cycles are cut off
//! by that limit instead of being tracked explicitly.

use crate::shader::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::shader::error::LoaderError;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INCLUDE_KEYWORD: &str = "#include";
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 32;

/// Loads shader sources and inlines their includes
#[derive(Debug, Clone)]
pub struct SourceLoader {
    keyword: String,
    max_depth: usize,
}

impl SourceLoader {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            max_depth: DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Load a file, reporting failures through the `log` facade
    pub fn load(&self, path: impl AsRef<Path>) -> Result<String, LoaderError> {
        self.load_with_sink(path, &mut LogSink)
    }

    /// Load a file, reporting failures to `sink`
    pub fn load_with_sink(
        &self,
        path: impl AsRef<Path>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<String, LoaderError> {
        let mut out = String::new();
        self.load_into(path.as_ref(), 0, &mut out, sink)
            .inspect_err(|err| sink.report(Diagnostic::from(err)))?;
        Ok(out)
    }

    /// Resolve includes in an in-memory source, relative to `base_dir`
    pub fn resolve_str(
        &self,
        source: &str,
        base_dir: impl AsRef<Path>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<String, LoaderError> {
        let base_dir = base_dir.as_ref();
        let mut out = String::new();
        self.inline(source, base_dir, base_dir, 0, &mut out, sink)
            .inspect_err(|err| sink.report(Diagnostic::from(err)))?;
        Ok(out)
    }

    fn load_into(
        &self,
        path: &Path,
        depth: usize,
        out: &mut String,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), LoaderError> {
        if depth > self.max_depth {
            return Err(LoaderError::IncludeDepth {
                path: path.to_path_buf(),
                limit: self.max_depth,
            });
        }

        let source = fs::read_to_string(path).map_err(|err| LoaderError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        self.inline(&source, base_dir, path, depth, out, sink)
    }

    fn inline(
        &self,
        source: &str,
        base_dir: &Path,
        origin: &Path,
        depth: usize,
        out: &mut String,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), LoaderError> {
        for (index, line) in source.lines().enumerate() {
            if !line.contains(self.keyword.as_str()) {
                out.push_str(line);
                out.push('\n');
                continue;
            }

            let target = include_target(line).ok_or_else(|| LoaderError::MalformedInclude {
                path: origin.to_path_buf(),
                line: index + 1,
            })?;
            let included: PathBuf = base_dir.join(target);
            log::debug!("{}:{} includes {}", origin.display(), index + 1, included.display());

            match self.load_into(&included, depth + 1, out, sink) {
                // Includes of the missing file were never reached, so this is its own read
                Err(err @ LoaderError::Io { .. }) => sink.report(Diagnostic::from(&err)),
                result => result?,
            }
            out.push('\n');
        }

        Ok(())
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new(DEFAULT_INCLUDE_KEYWORD)
    }
}

/// `#include "path"` → `path`
fn include_target(line: &str) -> Option<&str> {
    let word = line.split_whitespace().nth(1)?;
    let mut chars = word.chars();
    chars.next();
    chars.next_back();
    Some(chars.as_str()).filter(|target| !target.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::diagnostics::CollectingSink;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_include_target() {
        assert_eq!(include_target("#include \"a/b.glsl\""), Some("a/b.glsl"));
        assert_eq!(include_target("#include <lib.glsl>"), Some("lib.glsl"));
        assert_eq!(include_target("#include"), None);
        assert_eq!(include_target("#include \"\""), None);
    }

    #[test]
    fn test_plain_file_lines_are_newline_terminated() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "main.vert", "a\nb");

        let source = SourceLoader::default().load(&path).unwrap();
        assert_eq!(source, "a\nb\n");
    }

    #[test]
    fn test_nested_includes_relative_to_including_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "lib/inner.glsl", "inner");
        write(&dir, "lib/outer.glsl", "#include \"inner.glsl\"\nouter");
        let main = write(&dir, "main.frag", "first\n#include \"lib/outer.glsl\"\nlast");

        let source = SourceLoader::default().load(&main).unwrap();
        assert_eq!(source, "first\ninner\n\nouter\n\nlast\n");
    }

    #[test]
    fn test_custom_keyword() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.glsl", "shared");
        let main = write(&dir, "a.glsl", "#import \"b.glsl\"\n#include \"ignored\"");

        let source = SourceLoader::new("#import").load(&main).unwrap();
        assert_eq!(source, "shared\n\n#include \"ignored\"\n");
    }

    #[test]
    fn test_missing_include_is_reported_and_skipped() {
        let dir = TempDir::new().unwrap();
        let main = write(
            &dir,
            "main.vert",
            "#include \"missing.glsl\"\nlayout(location = 0) in vec3 position;",
        );
        let mut sink = CollectingSink::new();

        let source = SourceLoader::default()
            .load_with_sink(&main, &mut sink)
            .unwrap();

        assert_eq!(source, "\nlayout(location = 0) in vec3 position;\n");
        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.diagnostics()[0].category, "File IO");
        assert!(sink.diagnostics()[0].message.contains("missing.glsl"));
    }

    #[test]
    fn test_missing_nested_include_keeps_outer_contents() {
        let dir = TempDir::new().unwrap();
        write(&dir, "outer.glsl", "before\n#include \"gone.glsl\"\nafter");
        let main = write(&dir, "main.vert", "#include \"outer.glsl\"\nlast");
        let mut sink = CollectingSink::new();

        let source = SourceLoader::default()
            .load_with_sink(&main, &mut sink)
            .unwrap();

        assert_eq!(source, "before\n\nafter\n\nlast\n");
        assert_eq!(sink.diagnostics().len(), 1);
    }

    #[test]
    fn test_missing_top_level_file_fails() {
        let dir = TempDir::new().unwrap();
        let mut sink = CollectingSink::new();

        let err = SourceLoader::default()
            .load_with_sink(dir.path().join("absent.vert"), &mut sink)
            .unwrap_err();

        assert!(matches!(err, LoaderError::Io { ref path, .. } if path.ends_with("absent.vert")));
        assert_eq!(sink.diagnostics().len(), 1);
    }

    #[test]
    fn test_include_cycle_hits_depth_limit() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.glsl", "#include \"b.glsl\"");
        write(&dir, "b.glsl", "#include \"a.glsl\"");

        let err = SourceLoader::default().with_max_depth(4).load(&a).unwrap_err();
        assert!(matches!(err, LoaderError::IncludeDepth { limit: 4, .. }));
    }

    #[test]
    fn test_malformed_include() {
        let mut sink = CollectingSink::new();
        let err = SourceLoader::default()
            .resolve_str("ok\n#include\n", ".", &mut sink)
            .unwrap_err();
        assert!(matches!(err, LoaderError::MalformedInclude { line: 2, .. }));
        assert_eq!(sink.diagnostics().len(), 1);
    }

    #[test]
    fn test_resolve_str_relative_to_base_dir() {
        let dir = TempDir::new().unwrap();
        write(&dir, "shared.glsl", "shared");
        let mut sink = CollectingSink::new();

        let source = SourceLoader::default()
            .resolve_str("#include \"shared.glsl\"\nmain", dir.path(), &mut sink)
            .unwrap();
        assert_eq!(source, "shared\n\nmain\n");
        assert!(sink.is_empty());
    }
}
