// foundry-core/src/application/orchestrator.rs

use std::collections::HashMap;
use std::path::PathBuf;

use futures::StreamExt;
use serde::{Deserialize, Serialize};

use crate::application::init_config::init_deploy_config;
use crate::domain::pipeline::{builtin_plan, BuildStep, PlanSolver};
use crate::error::FoundryError;
use crate::infrastructure::config::load_deployment_config;
use crate::infrastructure::fs::atomic_write_json;
use crate::ports::runner::{ConnectorRunner, DeployContext};

/// Build parameters resolved by the CLI. `logs_bucket` has no default on
/// purpose: the CLI refuses to start a build without it.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub project_dir: PathBuf,
    pub config_file: PathBuf,
    pub logs_bucket: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Succeeded,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    pub id: String,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BuildReport {
    pub success: bool,
    pub started_at: String,
    pub finished_at: String,
    pub steps: Vec<StepReport>,
}

impl BuildReport {
    pub fn step(&self, id: &str) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.id == id)
    }
}

enum StepOutcome {
    Succeeded,
    Skipped(String),
}

/// Runs the built-in plan: validator first, then the gated connector steps
/// of the next layer concurrently. Fail-fast: once a step of a layer has
/// failed, later layers never start. The report is written to
/// `target/run_results.json` whatever the outcome.
pub async fn run_build(
    runner: &dyn ConnectorRunner,
    opts: &BuildOptions,
) -> Result<BuildReport, FoundryError> {
    println!("🚀 Starting Deployment Orchestrator...");
    let start_time = std::time::Instant::now();
    let started_at = chrono::Utc::now().to_rfc3339();

    let steps = builtin_plan();
    let layers = PlanSolver::plan_execution(&steps)?;
    let by_id: HashMap<&str, &BuildStep> = steps.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut reports: Vec<StepReport> = Vec::new();
    let mut failed = false;

    for (i, layer) in layers.iter().enumerate() {
        if layer.is_empty() {
            continue;
        }
        println!("  🔹 Executing layer {} ({} steps)...", i + 1, layer.len());

        let futures = layer
            .iter()
            .filter_map(|id| by_id.get(id.as_str()).copied())
            .map(|step| async move {
                let result = execute_step(step, runner, opts).await;
                (step.id.clone(), result)
            });

        // Steps of one layer are independent; run them side by side.
        let results: Vec<_> = futures::stream::iter(futures)
            .buffer_unordered(4)
            .collect()
            .await;

        for (id, result) in results {
            match result {
                Ok(StepOutcome::Succeeded) => {
                    println!("    ✅ Step finished: {id}");
                    reports.push(StepReport {
                        id,
                        status: StepStatus::Succeeded,
                        detail: None,
                    });
                }
                Ok(StepOutcome::Skipped(detail)) => {
                    reports.push(StepReport {
                        id,
                        status: StepStatus::Skipped,
                        detail: Some(detail),
                    });
                }
                Err(e) => {
                    eprintln!("    ❌ Step failed: {id}: {e}");
                    reports.push(StepReport {
                        id,
                        status: StepStatus::Failed,
                        detail: Some(e.to_string()),
                    });
                    failed = true;
                }
            }
        }

        if failed {
            break;
        }
    }

    let report = BuildReport {
        success: !failed,
        started_at,
        finished_at: chrono::Utc::now().to_rfc3339(),
        steps: reports,
    };

    let results_path = opts.project_dir.join("target").join("run_results.json");
    atomic_write_json(&results_path, &report)?;

    if report.success {
        println!(
            "✨ Done in {:.2}s. {} steps executed.",
            start_time.elapsed().as_secs_f64(),
            report
                .steps
                .iter()
                .filter(|s| s.status == StepStatus::Succeeded)
                .count()
        );
    } else {
        eprintln!("🛑 Build failed. See {}", results_path.display());
    }

    Ok(report)
}

async fn execute_step(
    step: &BuildStep,
    runner: &dyn ConnectorRunner,
    opts: &BuildOptions,
) -> Result<StepOutcome, FoundryError> {
    let Some(connector) = step.connector else {
        // The validator step: the only writer of the config file.
        init_deploy_config(&opts.config_file)?;
        return Ok(StepOutcome::Succeeded);
    };

    // Each deploy step re-reads the processed config on its own.
    let config =
        load_deployment_config(&opts.config_file).map_err(FoundryError::Infrastructure)?;

    if !config.deploys(connector) {
        let detail = format!(
            "Skipping {connector} deployment ({} is false).",
            connector.flag_name()
        );
        println!("    ⏭️  {detail}");
        return Ok(StepOutcome::Skipped(detail));
    }

    println!("    🚀 Deploying {connector} connector...");
    let ctx = DeployContext {
        project_dir: opts.project_dir.clone(),
        config_file: opts.config_file.clone(),
        logs_bucket: opts.logs_bucket.clone(),
    };
    runner.deploy(connector, &ctx).await?;
    Ok(StepOutcome::Succeeded)
}
