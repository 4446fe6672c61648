// foundry/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug foundry deploy ... for the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            project_dir,
            config_file,
            logs_bucket,
        } => commands::deploy::execute(project_dir, config_file, logs_bucket).await,

        Commands::Validate {
            project_dir,
            config_file,
        } => commands::validate::execute(project_dir, config_file),

        Commands::Render {
            project_dir,
            config_file,
            connector,
        } => commands::render::execute(project_dir, config_file, connector),

        Commands::Plan {
            project_dir,
            config_file,
        } => commands::plan::execute(project_dir, config_file),

        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
    }
}
