// foundry-core/src/ports/runner.rs
//
// What the orchestrator needs from a connector deployment, without knowing
// how it happens. Production spawns the connector's deploy script; tests
// plug in a recorder.

use crate::domain::pipeline::ConnectorKind;
use crate::error::FoundryError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Everything a deploy script receives from the build environment.
#[derive(Debug, Clone)]
pub struct DeployContext {
    pub project_dir: PathBuf,
    /// Path to the processed config file, re-read by every deploy step.
    pub config_file: PathBuf,
    /// GCS bucket collecting the deploy logs. Required, no default.
    pub logs_bucket: String,
}

#[async_trait]
pub trait ConnectorRunner: Send + Sync {
    async fn deploy(&self, connector: ConnectorKind, ctx: &DeployContext)
        -> Result<(), FoundryError>;
}
