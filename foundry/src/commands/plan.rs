// foundry/src/commands/plan.rs
//
// USE CASE: Preview the build plan without executing anything.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use foundry_core::application::{harness_seed_datasets, load_processed_config, plan_preview};

use crate::cli::resolve_config_file;

pub fn execute(project_dir: PathBuf, config_file: PathBuf) -> anyhow::Result<()> {
    let config_file = resolve_config_file(&project_dir, config_file);

    let config = load_processed_config(&config_file)
        .with_context(|| format!("Failed to load deployment config from {config_file:?}"))?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Step", "Connector", "Gate", "Action", "Wait for"]);

    for row in plan_preview(&config) {
        table.add_row(vec![
            row.step,
            row.connector.unwrap_or_else(|| "-".into()),
            row.gate.unwrap_or_else(|| "-".into()),
            row.action,
            if row.wait_for.is_empty() {
                "-".into()
            } else {
                row.wait_for.join(", ")
            },
        ]);
    }

    println!("{table}");

    let seeds = harness_seed_datasets(&config);
    if !seeds.is_empty() {
        println!("\n🧪 Test harness seed datasets:");
        for (label, dataset) in seeds {
            println!("   {label}: {dataset}");
        }
    }

    Ok(())
}
