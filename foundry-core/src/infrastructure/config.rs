// foundry-core/src/infrastructure/config.rs

use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::config::DeploymentConfig;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write_json;

/// Loads the deployment config. Deploy steps call this again after the
/// init step has rewritten the file, so they always observe the processed
/// form.
#[instrument(skip(path))]
pub fn load_deployment_config(path: &Path) -> Result<DeploymentConfig, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    info!(path = ?path, "Loading deployment config");

    let content = fs::read_to_string(path).map_err(InfrastructureError::Io)?;
    let config: DeploymentConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Rewrites the config file in place (atomic rename, pretty-printed).
pub fn save_deployment_config(
    path: &Path,
    config: &DeploymentConfig,
) -> Result<(), InfrastructureError> {
    atomic_write_json(path, config)
}
