use crate::download_client::DownloadClient;
use crate::error::{Result, SyncError};
use crate::github::{GitHubAsset, GitHubRelease};
use anyhow::Context;
use reqwest::StatusCode;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

const DOWNLOAD_BASE_URL: &str = "https://example.com/download/";

/// Serves a release listing the given adapters, plus some unrelated assets,
/// and writes a recognizable body for each download.
pub struct MockDownloadClient {
    release: GitHubRelease,
    failing: Vec<String>,
    requested_release_urls: Mutex<Vec<String>>,
}

impl MockDownloadClient {
    pub fn with_adapters(adapters: &[&str]) -> Self {
        let mut assets = vec![GitHubAsset {
            name: "wasmtime-v25.0.0-x86_64-linux.tar.xz".to_string(),
            browser_download_url: format!("{DOWNLOAD_BASE_URL}wasmtime-v25.0.0-x86_64-linux.tar.xz"),
            size: 1000,
        }];
        assets.extend(adapters.iter().map(|name| GitHubAsset {
            name: name.to_string(),
            browser_download_url: format!("{DOWNLOAD_BASE_URL}{name}"),
            size: Self::body_for(name).len() as u64,
        }));

        Self {
            release: GitHubRelease {
                tag_name: Some("v25.0.0".to_string()),
                assets,
            },
            failing: Vec::new(),
            requested_release_urls: Mutex::new(Vec::new()),
        }
    }

    /// Makes the download of `filename` answer with a 404.
    pub fn failing_on(mut self, filename: &str) -> Self {
        self.failing.push(filename.to_string());
        self
    }

    pub fn body_for(filename: &str) -> Vec<u8> {
        format!("\0asm mock adapter {filename}").into_bytes()
    }

    pub fn requested_release_urls(&self) -> Vec<String> {
        self.requested_release_urls.lock().unwrap().clone()
    }
}

impl DownloadClient for MockDownloadClient {
    async fn fetch_release(&self, api_url: &str) -> Result<GitHubRelease> {
        self.requested_release_urls
            .lock()
            .unwrap()
            .push(api_url.to_string());
        Ok(self.release.clone())
    }

    async fn download_asset(&self, url: &str, output_path: &Path) -> Result<u64> {
        let filename = url.trim_start_matches(DOWNLOAD_BASE_URL);
        if self.failing.iter().any(|f| f == filename) {
            return Err(SyncError::Download {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            });
        }

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).context("Failed to create mock output directory")?;
        }
        let body = Self::body_for(filename);
        fs::write(output_path, &body)
            .context(format!("Failed to write mock adapter: {:?}", output_path))?;
        Ok(body.len() as u64)
    }
}
