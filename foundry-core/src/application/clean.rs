// foundry-core/src/application/clean.rs

use crate::error::FoundryError;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::Path;

const CLEAN_TARGETS: [&str; 1] = ["target"];

pub fn clean_project(project_dir: &Path) -> Result<(), FoundryError> {
    tracing::info!("Cleaning build artifacts...");

    for target_rel_path in CLEAN_TARGETS {
        let full_path = project_dir.join(target_rel_path);

        // Zero-Trust Path Traversal Guard
        if !full_path.starts_with(project_dir) {
            return Err(FoundryError::UnsafePath(target_rel_path.to_string()));
        }

        if full_path.exists() {
            if full_path.is_dir() {
                fs::remove_dir_all(&full_path)
                    .map_err(|e| FoundryError::Infrastructure(InfrastructureError::Io(e)))?;
            } else {
                fs::remove_file(&full_path)
                    .map_err(|e| FoundryError::Infrastructure(InfrastructureError::Io(e)))?;
            }
            println!("   🗑️  Artifact removed: {target_rel_path}");
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_clean_removes_target_dir() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("target").join("views");
        fs::create_dir_all(&target)?;
        fs::write(target.join("impressions.sql"), "SELECT 1")?;

        clean_project(dir.path())?;

        assert!(!dir.path().join("target").exists());
        Ok(())
    }

    #[test]
    fn test_clean_is_a_noop_without_artifacts() -> Result<()> {
        let dir = tempdir()?;
        clean_project(dir.path())?;
        Ok(())
    }
}
