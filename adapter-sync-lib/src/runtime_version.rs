use crate::error::{Result, SyncError};
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;
use std::fmt;
use std::fs;
use std::path::Path;

/// A way of declaring the `wasmtime` dependency that we know how to read.
struct VersionPattern {
    name: &'static str,
    regex: Regex,
}

impl VersionPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    fn major<'a>(&self, manifest: &'a str) -> Option<&'a str> {
        self.regex
            .captures(manifest)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Tried in order, first match wins.
static VERSION_PATTERNS: Lazy<[VersionPattern; 3]> = Lazy::new(|| {
    [
        // wasmtime = { version = "^25", features = [...] }
        VersionPattern::new(
            "inline table",
            r#"(?:^|[^\w-])wasmtime\s*=\s*\{[^}]*version\s*=\s*["']?\^?(\d+)"#,
        ),
        // wasmtime = "25" or wasmtime = "^25.0.1"
        VersionPattern::new(
            "version string",
            r#"(?:^|[^\w-])wasmtime\s*=\s*["']\^?(\d+)[\d.]*["']"#,
        ),
        // [dependencies.wasmtime] or [target.'cfg(unix)'.dependencies.wasmtime]
        // version = "25"
        // The version line must come before the next table header, indented or not.
        VersionPattern::new(
            "dependency table",
            r#"\[[^\]\n]*dependencies\.wasmtime\][^\n]*(?:\n(?:[ \t]*(?:[^\[\s][^\n]*)?)?)*?\n\s*version\s*=\s*["']?\^?(\d+)"#,
        ),
    ]
});

/// The Wasmtime release the adapters are fetched for.
/// Only the major version is meaningful, so minor and patch are always zero.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeVersion(Version);

impl RuntimeVersion {
    pub fn new(major: u64) -> Self {
        Self(Version::new(major, 0, 0))
    }

    pub fn from_major_str(major: &str) -> Result<Self> {
        major
            .parse()
            .map(Self::new)
            .map_err(|_| SyncError::InvalidVersion(major.to_string()))
    }

    /// Example output: v25.0.0
    pub fn tag_name(&self) -> String {
        format!("v{}", self.0)
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns the major version digits of the first `wasmtime` declaration found.
pub fn find_major_version(manifest: &str) -> Option<&str> {
    VERSION_PATTERNS.iter().find_map(|pattern| {
        let major = pattern.major(manifest)?;
        tracing::debug!("Matched wasmtime {} declaration: {}", pattern.name, major);
        Some(major)
    })
}

/// Extracts the runtime version from manifest text.
/// `source` is only used for error reporting.
pub fn parse_runtime_version(manifest: &str, source: &Path) -> Result<RuntimeVersion> {
    let major =
        find_major_version(manifest).ok_or_else(|| SyncError::VersionNotFound(source.into()))?;
    RuntimeVersion::from_major_str(major)
}

pub fn read_runtime_version(manifest_path: &Path) -> Result<RuntimeVersion> {
    if !manifest_path.is_file() {
        return Err(SyncError::ManifestNotFound(manifest_path.to_path_buf()));
    }
    let content = fs::read_to_string(manifest_path)?;
    parse_runtime_version(&content, manifest_path)
}
