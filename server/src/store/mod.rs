//! Persistence layer. One module per entity family from §3; all stores are
//! thin wrappers over a shared `SqlitePool` using dynamic `sqlx::query`
//! (no compile-time `query!` macros, so the crate builds without a live
//! database or an `sqlx` offline cache checked in).

pub mod agent;
pub mod auth;
pub mod config_request;
pub mod deployment;

pub use agent::AgentStore;
pub use auth::AuthStore;
pub use config_request::ConfigRequestStore;
pub use deployment::DeploymentStore;
