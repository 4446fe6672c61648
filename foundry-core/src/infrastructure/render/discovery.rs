// foundry-core/src/infrastructure/render/discovery.rs

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::pipeline::ConnectorKind;
use crate::infrastructure::error::InfrastructureError;

/// A raw SQL template found under `views/<connector>/`.
#[derive(Debug, Clone)]
pub struct ViewTemplate {
    pub name: String,
    pub connector: ConnectorKind,
    pub path: PathBuf,
    pub raw_sql: String,
}

/// Scans `views/<connector>/` for `*.sql` templates. A missing directory
/// simply yields no templates; only the built-in views are emitted then.
pub fn discover_view_templates(
    project_dir: &Path,
    connector: ConnectorKind,
) -> Result<Vec<ViewTemplate>, InfrastructureError> {
    let views_dir = project_dir.join("views").join(connector.dir_name());
    if !views_dir.exists() {
        return Ok(Vec::new());
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(&views_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "sql") {
            continue;
        }

        let name = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let raw_sql = fs::read_to_string(path).map_err(InfrastructureError::Io)?;

        templates.push(ViewTemplate {
            name,
            connector,
            path: path.to_path_buf(),
            raw_sql,
        });
    }

    // Walk order is filesystem-dependent; keep output stable.
    templates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(templates)
}
