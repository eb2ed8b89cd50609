use crate::adapters::TargetFileSet;
use crate::config::Config;
use crate::download_client::DownloadClient;
use crate::error::{Result, SyncError};
use crate::github::release_metadata_url;
use crate::runtime_version::{RuntimeVersion, read_runtime_version};
use std::fmt;
use std::path::PathBuf;

/// Stages of a sync run, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    ResolvingVersion,
    LocatingRelease,
    ResolvingAssets,
    Downloading,
    Done,
    Failed,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncStage::ResolvingVersion => "resolving version",
            SyncStage::LocatingRelease => "locating release",
            SyncStage::ResolvingAssets => "resolving assets",
            SyncStage::Downloading => "downloading",
            SyncStage::Done => "done",
            SyncStage::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Record a failed download and carry on with the next file instead of aborting.
    pub keep_going: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedAdapter {
    pub filename: &'static str,
    pub path: PathBuf,
    pub bytes: u64,
}

/// What happened to a single target file.
#[derive(Debug)]
pub enum AssetOutcome {
    Downloaded(DownloadedAdapter),
    NotInRelease,
    Failed(SyncError),
}

impl AssetOutcome {
    /// Whether this outcome ends the run.
    /// A file missing from the release never does; a failed download does
    /// unless `keep_going` is set.
    pub fn halts(&self, options: &SyncOptions) -> bool {
        match self {
            AssetOutcome::Downloaded(_) | AssetOutcome::NotInRelease => false,
            AssetOutcome::Failed(_) => !options.keep_going,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub version: RuntimeVersion,
    pub api_url: String,
    pub downloaded: Vec<DownloadedAdapter>,
    /// Target files the release does not provide.
    pub skipped: Vec<&'static str>,
    /// Target files whose download failed. Only filled with `keep_going`.
    pub failed: Vec<&'static str>,
}

/// Reads the Wasmtime version from the runtime manifest and downloads the
/// matching WASI adapters into the resource directory.
///
/// Fails if the version can't be determined, the release can't be fetched,
/// or no adapter ends up downloaded. Missing adapters only produce warnings.
pub async fn sync_adapters<D: DownloadClient>(
    config: &Config,
    download_client: &D,
    options: SyncOptions,
) -> Result<SyncReport> {
    tracing::debug!("Stage: {}", SyncStage::ResolvingVersion);
    let version = read_runtime_version(&config.manifest_path)?;
    tracing::info!("Detected Wasmtime version: {version}");

    tracing::debug!("Stage: {}", SyncStage::LocatingRelease);
    let api_url = release_metadata_url(&config.api_base_url, &config.repository, &version);

    tracing::debug!("Stage: {}", SyncStage::ResolvingAssets);
    tracing::info!("Fetching release info for Wasmtime {version}...");
    tracing::info!("  API URL: {api_url}");
    let release = download_client.fetch_release(&api_url).await?;
    let targets = TargetFileSet::from_assets(&release.assets);
    tracing::debug!(
        "Resolved {} of {} adapter files from {} assets",
        targets.resolved_count(),
        targets.iter().count(),
        release.assets.len()
    );

    tracing::debug!("Stage: {}", SyncStage::Downloading);
    let mut report = SyncReport {
        version,
        api_url,
        downloaded: Vec::new(),
        skipped: Vec::new(),
        failed: Vec::new(),
    };

    for (filename, url) in targets.iter() {
        let outcome = match url {
            Some(url) => download_adapter(config, download_client, filename, url).await,
            None => AssetOutcome::NotInRelease,
        };
        let halts = outcome.halts(&options);

        match outcome {
            AssetOutcome::Downloaded(adapter) => report.downloaded.push(adapter),
            AssetOutcome::NotInRelease => {
                tracing::warn!("Could not find {filename} in release assets");
                report.skipped.push(filename);
            }
            AssetOutcome::Failed(e) if halts => return Err(e),
            AssetOutcome::Failed(e) => {
                tracing::warn!("Failed to download {filename}: {e}");
                report.failed.push(filename);
            }
        }
    }

    if report.downloaded.is_empty() {
        return Err(SyncError::NoAssetsDownloaded);
    }

    tracing::debug!("Stage: {}", SyncStage::Done);
    Ok(report)
}

async fn download_adapter<D: DownloadClient>(
    config: &Config,
    download_client: &D,
    filename: &'static str,
    url: &str,
) -> AssetOutcome {
    let path = config.res_dir.join(filename);
    tracing::info!("Downloading {url}...");
    tracing::info!("  to {}", path.display());

    match download_client.download_asset(url, &path).await {
        Ok(bytes) => AssetOutcome::Downloaded(DownloadedAdapter {
            filename,
            path,
            bytes,
        }),
        Err(e) => AssetOutcome::Failed(e),
    }
}
