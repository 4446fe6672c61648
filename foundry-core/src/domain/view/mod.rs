// foundry-core/src/domain/view/mod.rs

pub mod projection;
pub mod syntax;

pub use projection::{TableRef, ViewProjection, IMPRESSION_KEY_COLUMNS};
pub use syntax::parse_bigquery;
