// src/main.rs

use anyhow::Result;
use clap::Parser;
use gover::cli::{Cli, Commands};
use gover::commands;
use gover::workspace::Workspace;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => Workspace::default_path()?,
    };
    let workspace = Workspace::new(base_dir);

    match cli.command {
        Commands::Init { tags } => commands::init(&workspace, &tags)?,
        Commands::Add { tag } => commands::add(&workspace, &tag)?,
        Commands::Activate { tag } => commands::activate(&workspace, &tag)?,
        Commands::List => commands::list(&workspace)?,
        Commands::Available => commands::available(&workspace)?,
        Commands::Env => commands::env(&workspace)?,
    }

    Ok(())
}
