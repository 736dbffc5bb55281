// src/main.rs
mod app;
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use termspin::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_presets {
        app::list_presets();
        return Ok(());
    }

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;

    // Log the location of the log file
    tracing::info!("Logs are being written to: {log_file_path}");

    app::run(&args).await
}
