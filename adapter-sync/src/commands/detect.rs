use crate::cli::GlobalArgs;
use crate::ui;
use adapter_sync_lib::adapters::TARGET_FILES;
use adapter_sync_lib::config::Config;
use adapter_sync_lib::github::release_metadata_url;
use adapter_sync_lib::runtime_version::read_runtime_version;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct DetectCommand {}

impl DetectCommand {
    pub async fn run(self, global_args: GlobalArgs) -> Result<()> {
        let config = Config::setup(global_args.project.as_deref())?;
        let version = read_runtime_version(&config.manifest_path)?;

        ui::info(&format!(
            "Detected Wasmtime version: {}",
            version.to_string().green().bold()
        ));
        ui::info(&format!("  Manifest: {}", config.manifest_path.display()));
        ui::info(&format!(
            "  API URL: {}",
            release_metadata_url(&config.api_base_url, &config.repository, &version)
        ));

        tracing::info!("");
        for filename in TARGET_FILES {
            let status = if config.res_dir.join(filename).is_file() {
                "present".green()
            } else {
                "missing".yellow()
            };
            ui::info(&format!("  {filename}: {status}"));
        }
        ui::tip("Run `adapter-sync sync` to download the adapters for this version.");

        Ok(())
    }
}
