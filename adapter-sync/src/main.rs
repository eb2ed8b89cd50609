mod cli;
mod commands;
mod ui;

use adapter_sync_lib::logging::initialize_logging;
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_logging(cli.global_args.verbose);
    ui::configure_colors();

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
