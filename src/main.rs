use anyhow::Result;
use clap::Parser;

mod archive;
mod azure;
mod cli;
mod commands;
mod error;
mod naming;
mod preflight;
mod tools;
mod ui;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .init();

    match cli.command {
        Commands::Deploy {
            resource_group,
            name,
            location,
            src_path,
        } => {
            commands::deploy::execute(resource_group, name, location, src_path).await?;
        }
    }

    Ok(())
}
