use crate::error::Result;
use crate::github::GitHubRelease;
use std::path::Path;

pub trait DownloadClient {
    /// Fetches and parses the release metadata served at `api_url`.
    fn fetch_release(&self, api_url: &str) -> impl Future<Output = Result<GitHubRelease>> + Send;

    /// Writes the body served at `url` to `output_path`, creating parent
    /// directories as needed. Returns the number of bytes written.
    fn download_asset(
        &self,
        url: &str,
        output_path: &Path,
    ) -> impl Future<Output = Result<u64>> + Send;
}
