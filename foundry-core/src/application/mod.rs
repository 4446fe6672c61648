// foundry-core/src/application/mod.rs

pub mod clean;
pub mod init_config;
pub mod orchestrator;
pub mod plan;
pub mod ports;
pub mod render_views;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write:
// `use foundry_core::application::{run_build, init_deploy_config, render_views};`
// without knowing the internal file structure.

pub use clean::clean_project;
pub use init_config::{init_deploy_config, load_processed_config};
pub use orchestrator::{run_build, BuildOptions, BuildReport, StepReport, StepStatus};
pub use plan::{harness_seed_datasets, plan_preview, PlanRow};
pub use render_views::{render_views, RenderedView};
