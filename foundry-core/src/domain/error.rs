// foundry-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Config file is missing the '{0}' section")]
    #[diagnostic(
        code(foundry::domain::config_section),
        help("Add the section to your marketing config file.")
    )]
    MissingSection(String),

    #[error("Config file is missing some {section} attributes or has empty values: {attrs:?}")]
    #[diagnostic(code(foundry::domain::config_attrs))]
    MissingAttributes { section: String, attrs: Vec<String> },

    #[error("Invalid `dataflowRegion`: `{region}`. It's expected to be in `{location}`")]
    #[diagnostic(
        code(foundry::domain::region),
        help("The Dataflow region must equal the BigQuery location or start with '<location>-'.")
    )]
    RegionOutsideLocation { region: String, location: String },

    #[error("Config validation failed for {section}: {message}")]
    #[diagnostic(code(foundry::domain::config_rule))]
    InvalidValue { section: String, message: String },

    #[error("Build step '{step}' waits for unknown step '{dependency}'")]
    #[diagnostic(code(foundry::domain::unknown_step), help("Check the waitFor list of your plan."))]
    UnknownStep { step: String, dependency: String },

    #[error("Circular dependency detected in build plan: {0}")]
    #[diagnostic(code(foundry::domain::cycle))]
    CircularDependency(String),

    #[error("Invalid view projection: {0}")]
    #[diagnostic(code(foundry::domain::projection))]
    InvalidProjection(String),
}
