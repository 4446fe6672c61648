// foundry-core/src/infrastructure/process.rs
//
// Production ConnectorRunner: spawns the connector's deploy script with the
// config file and logs bucket in its environment, inheriting stdio so the
// script's own logging reaches the build output. Exit status is the whole
// contract; a non-zero exit fails the step.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::info;

use crate::domain::pipeline::ConnectorKind;
use crate::error::FoundryError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::runner::{ConnectorRunner, DeployContext};

pub struct ScriptRunner;

impl ScriptRunner {
    fn script_path(connector: ConnectorKind, ctx: &DeployContext) -> PathBuf {
        ctx.project_dir
            .join("connectors")
            .join(connector.dir_name())
            .join("deploy.sh")
    }
}

#[async_trait]
impl ConnectorRunner for ScriptRunner {
    async fn deploy(
        &self,
        connector: ConnectorKind,
        ctx: &DeployContext,
    ) -> Result<(), FoundryError> {
        let script = Self::script_path(connector, ctx);
        if !script.exists() {
            return Err(FoundryError::Infrastructure(
                InfrastructureError::ScriptMissing(script.display().to_string()),
            ));
        }

        info!(connector = %connector, script = ?script, "Spawning deploy script");

        let status = Command::new("bash")
            .arg(&script)
            .current_dir(&ctx.project_dir)
            .env("CONFIG_FILE", &ctx.config_file)
            .env("GCS_LOGS_BUCKET", &ctx.logs_bucket)
            .status()
            .await
            .map_err(InfrastructureError::Io)?;

        if status.success() {
            Ok(())
        } else {
            Err(FoundryError::Infrastructure(
                InfrastructureError::DeployFailed {
                    connector: connector.section().to_string(),
                    code: status.code().unwrap_or(-1),
                },
            ))
        }
    }
}
