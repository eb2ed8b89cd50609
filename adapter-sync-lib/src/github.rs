use crate::download_client::DownloadClient;
use crate::error::{Result, SyncError};
use crate::logging::{progress_bar_style, spinner_style};
use crate::runtime_version::RuntimeVersion;
use anyhow::Context;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::instrument;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const USER_AGENT: &str = concat!("adapter-sync/", env!("CARGO_PKG_VERSION"));

/// Matches the GitHub API JSON response for a single release
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GitHubRelease {
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub assets: Vec<GitHubAsset>,
}

/// Matches the GitHub API JSON response for a single release asset
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GitHubAsset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub size: u64,
}

/// Example output: https://api.github.com/repos/bytecodealliance/wasmtime/releases/tags/v25.0.0
pub fn release_metadata_url(
    api_base_url: &str,
    repository: &str,
    version: &RuntimeVersion,
) -> String {
    format!(
        "{}/repos/{}/releases/tags/{}",
        api_base_url.trim_end_matches('/'),
        repository,
        version.tag_name()
    )
}

/// Human facing page listing every release of `repository`.
pub fn releases_page_url(repository: &str) -> String {
    format!("https://github.com/{repository}/releases")
}

pub struct GitHubClient {
    client: Client,
}

impl DownloadClient for GitHubClient {
    #[instrument(skip_all)]
    async fn fetch_release(&self, api_url: &str) -> Result<GitHubRelease> {
        let current_span = tracing::Span::current();
        current_span.pb_set_style(&spinner_style("{msg}")?);
        current_span.pb_set_message("Fetching release info from GitHub...");
        current_span.pb_set_finish_message("Fetching release info from GitHub... Done");

        let response = self
            .client
            .get(api_url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|source| SyncError::ReleaseRequest {
                url: api_url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SyncError::ReleaseUnreachable {
                url: api_url.to_string(),
                status: response.status(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| SyncError::ReleaseRequest {
                url: api_url.to_string(),
                source,
            })?;
        let release: GitHubRelease = serde_json::from_slice(&body)?;
        tracing::debug!(
            "Release {} lists {} assets",
            release.tag_name.as_deref().unwrap_or("<untagged>"),
            release.assets.len()
        );
        Ok(release)
    }

    #[instrument(skip_all)]
    async fn download_asset(&self, url: &str, path: &Path) -> Result<u64> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| url.to_string());

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::Download {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let current_span = tracing::Span::current();
        current_span.pb_set_style(&progress_bar_style()?);
        current_span.pb_set_length(response.content_length().unwrap_or(0));
        current_span.pb_set_message(&format!("Downloading {file_name}..."));
        current_span.pb_set_finish_message(&format!("Downloading {file_name}... Complete!"));

        // Truncates whatever a previous run left behind
        let mut file = tokio::fs::File::create(path)
            .await
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut downloaded = 0u64;
        let mut stream = response.bytes_stream();

        use futures_util::StreamExt;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            current_span.pb_set_position(downloaded);
        }

        file.flush().await?;
        Ok(downloaded)
    }
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}
