use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Location of the runtime package manifest, relative to the project root.
pub const MANIFEST_RELATIVE_PATH: &str = "packages/runtime/Cargo.toml";

/// Directory the adapters are written to, relative to the project root.
pub const RES_DIR_RELATIVE_PATH: &str = "packages/runtime/res";

pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

pub const WASMTIME_REPOSITORY: &str = "bytecodealliance/wasmtime";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the project whose runtime adapters are kept in sync
    pub project_root: PathBuf,

    /// Cargo.toml of the runtime package, source of the Wasmtime version
    pub manifest_path: PathBuf,

    /// Directory where the adapter files are written
    pub res_dir: PathBuf,

    /// Base URL of the GitHub REST API.
    pub api_base_url: String,

    /// `owner/name` of the repository publishing the adapters.
    pub repository: String,
}

impl Config {
    pub fn new_for_path(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest_path: project_root.join(MANIFEST_RELATIVE_PATH),
            res_dir: project_root.join(RES_DIR_RELATIVE_PATH),
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            repository: WASMTIME_REPOSITORY.to_string(),
        }
    }

    /// Sets up a new Config for the given project root.
    /// Without an explicit root, the nearest ancestor of the current directory
    /// holding the runtime manifest is used, falling back to the current directory.
    /// See also [find_project_root].
    pub fn setup(project_root: Option<&Path>) -> Result<Self> {
        let project_root = match project_root {
            Some(root) => root.to_path_buf(),
            None => {
                let current_dir =
                    std::env::current_dir().context("Failed to read current directory")?;
                find_project_root(&current_dir).unwrap_or(current_dir)
            }
        };
        tracing::debug!("Using project root {}", project_root.display());
        Ok(Self::new_for_path(&project_root))
    }

    pub fn with_api_base_url(mut self, api_base_url: &str) -> Self {
        self.api_base_url = api_base_url.to_string();
        self
    }
}

/// Searches for the runtime manifest starting from `start_path`
/// and moving upwards towards the filesystem root.
pub fn find_project_root(start_path: &Path) -> Option<PathBuf> {
    let mut current_dir = start_path.to_path_buf();

    loop {
        if current_dir.join(MANIFEST_RELATIVE_PATH).is_file() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            return None;
        }
    }
}
