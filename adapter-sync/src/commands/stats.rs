use crate::cli::GlobalArgs;
use crate::ui;
use adapter_sync_lib::config::Config;
use adapter_sync_lib::project_stats::{CategoryStats, ProjectStats, analyze_project};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct StatsCommand {
    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    pub async fn run(self, global_args: GlobalArgs) -> Result<()> {
        let config = Config::setup(global_args.project.as_deref())?;
        let stats = analyze_project(&config.project_root)?;

        if self.json {
            let json =
                serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?;
            println!("{json}");
            return Ok(());
        }

        ui::info(&format!(
            "Analyzing project at: {}",
            config.project_root.display()
        ));
        Self::print_stats(&stats);
        Ok(())
    }

    fn print_stats(stats: &ProjectStats) {
        let rule = "=".repeat(60);
        tracing::info!("\n{rule}");
        tracing::info!("{:^60}", "Project Statistics");
        tracing::info!("{rule}\n");

        Self::print_category("Rust Files:", &stats.rust);
        Self::print_category("WIT Interface Files:", &stats.wit);
        Self::print_category("Other Files (TOML, MD):", &stats.other);

        tracing::info!("{}", "Total:".cyan().bold());
        tracing::info!("   Files: {}", stats.total_files);
        tracing::info!("   Lines: {}", stats.total_lines);
        tracing::info!("\n{rule}\n");
    }

    fn print_category(title: &str, category: &CategoryStats) {
        if category.files == 0 {
            return;
        }
        tracing::info!("{}", title.cyan().bold());
        tracing::info!("   Files: {}", category.files);
        tracing::info!("   Lines: {}", category.lines);
        tracing::info!("");
    }
}
