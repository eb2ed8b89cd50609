use crate::sync::SyncStage;
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Cargo.toml not found at {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Could not find Wasmtime version in {}", .0.display())]
    VersionNotFound(PathBuf),

    #[error("Wasmtime version '{0}' is invalid")]
    InvalidVersion(String),

    #[error("Failed to fetch release info from {url}: {status}")]
    ReleaseUnreachable { url: String, status: StatusCode },

    #[error("Failed to fetch release info from {url}")]
    ReleaseRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse release info: {0}")]
    InvalidReleaseMetadata(#[from] serde_json::Error),

    #[error("No WASI adapter files were downloaded")]
    NoAssetsDownloaded,

    #[error("Download of {url} failed: {status}")]
    Download { url: String, status: StatusCode },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SyncError {
    /// The pipeline stage this error belongs to.
    pub fn stage(&self) -> SyncStage {
        match self {
            SyncError::ManifestNotFound(_)
            | SyncError::VersionNotFound(_)
            | SyncError::InvalidVersion(_) => SyncStage::ResolvingVersion,
            SyncError::ReleaseUnreachable { .. }
            | SyncError::ReleaseRequest { .. }
            | SyncError::InvalidReleaseMetadata(_) => SyncStage::ResolvingAssets,
            SyncError::NoAssetsDownloaded
            | SyncError::Download { .. }
            | SyncError::Http(_)
            | SyncError::Io(_)
            | SyncError::Other(_) => SyncStage::Downloading,
        }
    }
}

pub type Result<T, E = SyncError> = std::result::Result<T, E>;
