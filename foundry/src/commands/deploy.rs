// foundry/src/commands/deploy.rs
//
// USE CASE: Run the full deployment build.

use std::path::PathBuf;

use foundry_core::application::{run_build, BuildOptions, StepStatus};
use foundry_core::infrastructure::process::ScriptRunner;

use crate::cli::resolve_config_file;

pub async fn execute(
    project_dir: PathBuf,
    config_file: PathBuf,
    logs_bucket: String,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();
    let config_file = resolve_config_file(&project_dir, config_file);

    let opts = BuildOptions {
        project_dir,
        config_file,
        logs_bucket,
    };
    tracing::info!(bucket = %opts.logs_bucket, "Starting deployment build");

    let result = run_build(&ScriptRunner, &opts).await;

    match result {
        Ok(report) => {
            if report.success {
                println!("\n✨ SUCCESS! Build finished in {:.2?}", start.elapsed());
            } else {
                let failed = report
                    .steps
                    .iter()
                    .filter(|s| s.status == StepStatus::Failed)
                    .count();
                eprintln!("\n❌ FAILURE. {failed} steps failed.");
                // Exit with error code for CI/CD
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("\n💥 CRITICAL BUILD ERROR: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
