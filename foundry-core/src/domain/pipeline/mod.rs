// foundry-core/src/domain/pipeline/mod.rs

pub mod solver;
pub mod step;

pub use solver::PlanSolver;
pub use step::{builtin_plan, BuildStep, ConnectorKind, CM360_STEP_ID, GOOGLEADS_STEP_ID, INIT_STEP_ID};
