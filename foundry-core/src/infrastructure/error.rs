// foundry-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(foundry::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / JSON ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(
        code(foundry::infra::json),
        help("Check your config file syntax (commas, quoting, types).")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("Deployment configuration not found at '{0}'")]
    #[diagnostic(code(foundry::infra::config_missing))]
    ConfigNotFound(String),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(foundry::infra::template),
        help("Check your Jinja syntax ({{ ... }}) inside the SQL template.")
    )]
    TemplateError(#[from] minijinja::Error),

    // --- SQL SYNTAX ---
    #[error("Rendered SQL failed to parse: {0}")]
    #[diagnostic(
        code(foundry::infra::sql_syntax),
        help("The rendered view is not valid BigQuery SQL. Inspect the template output.")
    )]
    SqlSyntax(#[from] sqlparser::parser::ParserError),

    // --- DEPLOY SCRIPTS ---
    #[error("Deployment script for {connector} failed with exit code {code}")]
    #[diagnostic(
        code(foundry::infra::deploy_script),
        help("Inspect the connector's deploy log in the GCS logs bucket.")
    )]
    DeployFailed { connector: String, code: i32 },

    #[error("Deployment script not found at '{0}'")]
    #[diagnostic(code(foundry::infra::script_missing))]
    ScriptMissing(String),
}
