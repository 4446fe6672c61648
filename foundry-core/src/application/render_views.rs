// foundry-core/src/application/render_views.rs
//
// USE CASE: emit the reporting views for every enabled connector. Each
// connector gets the built-in impression-grain view plus any user template
// found under views/<connector>/. Everything is parsed as BigQuery SQL
// before landing under target/views/.

use std::path::{Path, PathBuf};

use crate::application::ports::TemplateEngine;
use crate::domain::config::DeploymentConfig;
use crate::domain::pipeline::ConnectorKind;
use crate::domain::view::{parse_bigquery, TableRef, ViewProjection};
use crate::error::FoundryError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use crate::infrastructure::render::{discover_view_templates, substitution_context};

#[derive(Debug, Clone)]
pub struct RenderedView {
    pub connector: ConnectorKind,
    pub name: String,
    pub path: PathBuf,
}

pub fn render_views(
    engine: &dyn TemplateEngine,
    project_dir: &Path,
    config: &DeploymentConfig,
    only: Option<ConnectorKind>,
) -> Result<Vec<RenderedView>, FoundryError> {
    let context = substitution_context(config);
    let out_root = project_dir.join("target").join("views");
    let mut rendered = Vec::new();

    for kind in ConnectorKind::ALL {
        if only.is_some_and(|selected| selected != kind) {
            continue;
        }
        if !config.deploys(kind) {
            println!(
                "   ⏭️  Skipping {kind} views ({} is false).",
                kind.flag_name()
            );
            continue;
        }

        let out_dir = out_root.join(kind.dir_name());

        // 1. Built-in impression-grain reporting view.
        let ddl = builtin_view_ddl(config, kind)?;
        let path = out_dir.join("impressions.sql");
        check_and_write(&path, &ddl)?;
        println!("    📄 Rendered view: {}", path.display());
        rendered.push(RenderedView {
            connector: kind,
            name: "impressions".into(),
            path,
        });

        // 2. User-supplied templates.
        for template in discover_view_templates(project_dir, kind)? {
            let sql = engine.render(&template.raw_sql, &context)?;
            let path = out_dir.join(format!("{}.sql", template.name));
            check_and_write(&path, &sql)?;
            println!("    📄 Rendered view: {}", path.display());
            rendered.push(RenderedView {
                connector: kind,
                name: template.name,
                path,
            });
        }
    }

    Ok(rendered)
}

fn builtin_view_ddl(
    config: &DeploymentConfig,
    kind: ConnectorKind,
) -> Result<String, FoundryError> {
    // The config was validated before rendering; these lookups only fail if
    // a caller skipped that step.
    let missing =
        |field: &str| FoundryError::InternalError(format!("config missing {field} for {kind}"));

    let datasets = config.datasets(kind).ok_or_else(|| missing("datasets"))?;
    let cdc = datasets.cdc.as_deref().ok_or_else(|| missing("cdc dataset"))?;
    let reporting = datasets
        .reporting
        .as_deref()
        .ok_or_else(|| missing("reporting dataset"))?;
    let src_project = config
        .project_id_source
        .as_deref()
        .ok_or_else(|| missing("projectIdSource"))?;
    let tgt_project = config.project_id_target.as_deref().unwrap_or(src_project);

    let projection = ViewProjection::impressions("impressions");
    Ok(projection.ddl(
        &TableRef::new(tgt_project, reporting, projection.name()),
        &TableRef::new(src_project, cdc, projection.name()),
    ))
}

fn check_and_write(path: &Path, sql: &str) -> Result<(), FoundryError> {
    parse_bigquery(sql)
        .map_err(|e| FoundryError::Infrastructure(InfrastructureError::SqlSyntax(e)))?;
    atomic_write(path, sql)?;
    Ok(())
}
