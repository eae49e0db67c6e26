//! raspberry-web-deploy - idempotent local installer for raspberry-web
//!
//! Copies the release binary, default configuration, seed database and
//! (on Linux) the systemd unit into their system locations. Re-running is
//! safe: the binary is replaced only when its bytes changed, and
//! user-owned files are never overwritten once present.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployReport, DeployUseCase, ItemOutcome, ItemStatus};
pub use config::{DeployConfig, DeployLayout};
pub use domain::entities::DeploymentItem;
pub use domain::value_objects::{DeployState, FileMode, Platform, SyncOutcome, SyncPolicy};
pub use error::{DeployError, DeployResult};
