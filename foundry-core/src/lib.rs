// foundry-core/src/lib.rs

#![allow(missing_docs)]

// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts the application depends on (ConnectorRunner...)
pub mod ports;

// 2. Domain (Business core)
// Deployment config rules, build plan, view projection.
// Depends on NOTHING else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical implementation (JSON config IO, Jinja, process spawning)
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (Build, Init Config, Render, Clean)
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Lets callers import the main error easily: use foundry_core::FoundryError;
pub use error::FoundryError;
