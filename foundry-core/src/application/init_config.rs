// foundry-core/src/application/init_config.rs
//
// USE CASE: the init_deploy_config step. Load, normalize, validate, then
// rewrite the config file in place so every later step reads the processed
// form. Runs before any connector deploy; a validation failure here stops
// the whole build.

use std::path::Path;

use crate::domain::config::{validate_config, DeploymentConfig};
use crate::error::FoundryError;
use crate::infrastructure::config::{load_deployment_config, save_deployment_config};

/// Load + normalize + validate, without touching the file.
pub fn load_processed_config(config_path: &Path) -> Result<DeploymentConfig, FoundryError> {
    let mut config =
        load_deployment_config(config_path).map_err(FoundryError::Infrastructure)?;
    config.normalize();
    validate_config(&config).map_err(FoundryError::Domain)?;
    Ok(config)
}

/// The full init step: the processed form is written back in place.
pub fn init_deploy_config(config_path: &Path) -> Result<DeploymentConfig, FoundryError> {
    println!("⚙️  Processing deployment config: {}", config_path.display());

    let config = load_processed_config(config_path)?;
    save_deployment_config(config_path, &config).map_err(FoundryError::Infrastructure)?;

    tracing::info!(path = ?config_path, "Deployment config validated and rewritten");
    println!("   ✅ Config validated and normalized.");
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    const VALID: &str = r#"{
        "projectIdSource": " src-project ",
        "location": "us",
        "deployMarketing": true,
        "marketing": {
            "deployGoogleAds": false,
            "deployCM360": false,
            "dataflowRegion": "us-central1"
        }
    }"#;

    #[test]
    fn test_init_rewrites_processed_form() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("marketing_config.json");
        std::fs::write(&path, VALID)?;

        let config = init_deploy_config(&path)?;
        assert_eq!(config.project_id_source.as_deref(), Some("src-project"));
        // projectIdTarget was absent: defaulted to the source project.
        assert_eq!(config.project_id_target.as_deref(), Some("src-project"));

        // The file on disk now holds the processed form.
        let on_disk: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(on_disk["projectIdSource"], "src-project");
        assert_eq!(on_disk["projectIdTarget"], "src-project");
        Ok(())
    }

    #[test]
    fn test_invalid_config_leaves_file_untouched() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("marketing_config.json");
        let invalid = r#"{ "projectIdSource": "src", "location": "us", "deployMarketing": true }"#;
        std::fs::write(&path, invalid)?;

        assert!(init_deploy_config(&path).is_err());
        // Rewrite only happens after validation passes.
        assert_eq!(std::fs::read_to_string(&path)?, invalid);
        Ok(())
    }

    #[test]
    fn test_missing_file_fails() {
        let result = init_deploy_config(Path::new("/nonexistent/config.json"));
        assert!(result.is_err());
    }
}
