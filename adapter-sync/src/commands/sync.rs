use crate::cli::GlobalArgs;
use crate::ui;
use adapter_sync_lib::config::Config;
use adapter_sync_lib::error::SyncError;
use adapter_sync_lib::github::{GitHubClient, releases_page_url};
use adapter_sync_lib::sync::{SyncOptions, SyncReport, sync_adapters};
use anyhow::{Context, Result};
use clap::Args;

#[derive(Args, Default)]
pub struct SyncCommand {
    /// Keep downloading the remaining adapters when one download fails
    #[arg(long)]
    pub keep_going: bool,
}

impl SyncCommand {
    pub async fn run(self, global_args: GlobalArgs) -> Result<()> {
        let config = Config::setup(global_args.project.as_deref())?;
        let github_client = GitHubClient::new()?;
        let options = SyncOptions {
            keep_going: self.keep_going,
        };

        let report = match sync_adapters(&config, &github_client, options).await {
            Ok(report) => report,
            Err(e @ (SyncError::ReleaseUnreachable { .. } | SyncError::ReleaseRequest { .. })) => {
                return Err(e).context(format!(
                    "Please check that the version exists at {}",
                    releases_page_url(&config.repository)
                ));
            }
            Err(e) => {
                tracing::debug!("Sync failed while {}", e.stage());
                return Err(e.into());
            }
        };

        Self::print_summary(&config, &report);
        Ok(())
    }

    fn print_summary(config: &Config, report: &SyncReport) {
        tracing::info!("");
        for adapter in &report.downloaded {
            let shown_path = pathdiff::diff_paths(&adapter.path, &config.project_root)
                .unwrap_or_else(|| adapter.path.clone());
            ui::info(&format!(
                "{} ({} bytes)",
                shown_path.display(),
                adapter.bytes
            ));
        }

        if !report.failed.is_empty() {
            ui::warning(&format!(
                "Failed to download: {}",
                report.failed.join(", ")
            ));
            ui::tip("Run `adapter-sync sync` again to retry.");
        }

        if report.skipped.is_empty() && report.failed.is_empty() {
            ui::success("WASI adapters downloaded successfully");
        } else {
            ui::success(&format!(
                "Downloaded {} of {} WASI adapters for Wasmtime {}",
                report.downloaded.len(),
                report.downloaded.len() + report.skipped.len() + report.failed.len(),
                report.version
            ));
        }
    }
}
