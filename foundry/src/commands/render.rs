// foundry/src/commands/render.rs
//
// USE CASE: Render the reporting views for enabled connectors.

use std::path::PathBuf;

use anyhow::Context;
use foundry_core::application::{load_processed_config, render_views};
use foundry_core::domain::pipeline::ConnectorKind;
use foundry_core::infrastructure::render::JinjaRenderer;

use crate::cli::resolve_config_file;

pub fn execute(
    project_dir: PathBuf,
    config_file: PathBuf,
    connector: Option<String>,
) -> anyhow::Result<()> {
    let config_file = resolve_config_file(&project_dir, config_file);

    let only = connector
        .map(|name| {
            name.parse::<ConnectorKind>()
                .map_err(|e| anyhow::anyhow!(e))
        })
        .transpose()?;

    println!("📄 Rendering reporting views...");
    let config = load_processed_config(&config_file)
        .with_context(|| format!("Failed to load deployment config from {config_file:?}"))?;

    let engine = JinjaRenderer::new();
    let rendered = render_views(&engine, &project_dir, &config, only)?;

    if rendered.is_empty() {
        println!("   (no connector enabled, nothing to render)");
    } else {
        println!("✨ Rendered {} views under target/views/.", rendered.len());
    }
    Ok(())
}
