use crate::github::GitHubAsset;

pub const COMMAND_ADAPTER: &str = "wasi_snapshot_preview1.command.wasm";
pub const REACTOR_ADAPTER: &str = "wasi_snapshot_preview1.reactor.wasm";

/// The adapter files kept in sync, in download order.
pub const TARGET_FILES: [&str; 2] = [COMMAND_ADAPTER, REACTOR_ADAPTER];

/// Required adapter filenames and the download URL each one resolved to, if any.
///
/// The set of filenames is fixed; resolving only fills in URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFileSet {
    entries: [(&'static str, Option<String>); 2],
}

impl Default for TargetFileSet {
    fn default() -> Self {
        Self {
            entries: TARGET_FILES.map(|name| (name, None)),
        }
    }
}

impl TargetFileSet {
    /// Records the download URL of every asset named like a target file.
    /// When the release lists a name twice, the later asset wins.
    pub fn resolve(&mut self, assets: &[GitHubAsset]) {
        for asset in assets {
            if let Some((_, url)) = self
                .entries
                .iter_mut()
                .find(|(name, _)| *name == asset.name)
            {
                *url = Some(asset.browser_download_url.clone());
            }
        }
    }

    pub fn from_assets(assets: &[GitHubAsset]) -> Self {
        let mut set = Self::default();
        set.resolve(assets);
        set
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(name, url)| (*name, url.as_deref()))
    }

    pub fn url(&self, filename: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| *name == filename)
            .and_then(|(_, url)| url)
    }

    pub fn resolved_count(&self) -> usize {
        self.iter().filter(|(_, url)| url.is_some()).count()
    }
}
