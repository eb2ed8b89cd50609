use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{detect::DetectCommand, stats::StatsCommand, sync::SyncCommand};

#[derive(Parser)]
#[command(name = "adapter-sync")]
#[command(about = "Download the WASI adapters matching the project's Wasmtime version")]
#[command(version)]
pub struct Cli {
    /// Defaults to `sync`
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[derive(clap::Args, Clone)]
pub struct GlobalArgs {
    /// Project root (defaults to the nearest parent directory containing packages/runtime/Cargo.toml)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the WASI adapters into packages/runtime/res
    Sync(SyncCommand),

    /// Show the Wasmtime version declared by the runtime manifest
    Detect(DetectCommand),

    /// Count source files and lines in the project
    Stats(StatsCommand),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Sync(cmd)) => cmd.run(self.global_args).await,
            Some(Commands::Detect(cmd)) => cmd.run(self.global_args).await,
            Some(Commands::Stats(cmd)) => cmd.run(self.global_args).await,
            None => SyncCommand::default().run(self.global_args).await,
        }
    }
}
