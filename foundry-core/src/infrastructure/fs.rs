// foundry-core/src/infrastructure/fs.rs

use crate::infrastructure::error::InfrastructureError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically through a temporary file in the same
/// directory, creating parent directories as needed. The target is either
/// fully written or untouched; partial artifacts never land, which matters
/// most for the in-place config rewrite.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    if !parent.as_os_str().is_empty() && !parent.exists() {
        std::fs::create_dir_all(parent).map_err(InfrastructureError::Io)?;
    }

    // Same directory, so the final persist is a rename on one filesystem.
    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;
    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Pretty-printed JSON variant used for the config rewrite and run reports.
pub fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), InfrastructureError> {
    let mut content = serde_json::to_string_pretty(data)?;
    content.push('\n');
    atomic_write(path, content)
}
