// foundry-core/src/application/plan.rs
//
// Dry preview of the build: which steps would run, which gates are open,
// and which harness datasets would seed the raw/cdc layers when testData
// is on. Nothing here touches the filesystem.

use serde::Serialize;

use crate::domain::config::DeploymentConfig;
use crate::domain::naming::harness_dataset_name;
use crate::domain::pipeline::{builtin_plan, ConnectorKind};

#[derive(Debug, Clone, Serialize)]
pub struct PlanRow {
    pub step: String,
    pub connector: Option<String>,
    pub gate: Option<String>,
    pub action: String,
    pub wait_for: Vec<String>,
}

pub fn plan_preview(config: &DeploymentConfig) -> Vec<PlanRow> {
    builtin_plan()
        .into_iter()
        .map(|step| match step.connector {
            None => PlanRow {
                step: step.id,
                connector: None,
                gate: None,
                action: "validate config".into(),
                wait_for: step.wait_for,
            },
            Some(kind) => {
                let enabled = config.deploys(kind);
                PlanRow {
                    step: step.id,
                    connector: Some(kind.section().to_string()),
                    gate: Some(format!("{}={}", kind.flag_name(), enabled)),
                    action: if enabled { "deploy" } else { "skip" }.into(),
                    wait_for: step.wait_for,
                }
            }
        })
        .collect()
}

/// `(label, dataset)` pairs of the harness datasets that would seed the
/// enabled connectors. Empty unless `testData` is on.
pub fn harness_seed_datasets(config: &DeploymentConfig) -> Vec<(String, String)> {
    if !config.test_data {
        return Vec::new();
    }
    let location = config.location.as_deref().unwrap_or_default();

    let mut seeds = Vec::new();
    for kind in ConnectorKind::ALL {
        if !config.deploys(kind) {
            continue;
        }
        for dataset_type in ["raw", "cdc"] {
            seeds.push((
                format!("{} {dataset_type}", kind.section()),
                harness_dataset_name(&kind.workload_path(), dataset_type, location),
            ));
        }
    }
    seeds
}
