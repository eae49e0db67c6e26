//! Domain Value Objects
//!
//! Immutable value types that describe how and where an item is deployed.

mod deploy_state;
mod file_mode;
mod platform;
mod sync_policy;

pub use deploy_state::{DeployState, FailureKind};
pub use file_mode::{FileMode, ItemRole};
pub use platform::{Platform, PlatformSet};
pub use sync_policy::{CopyKind, DirStatus, SkipReason, SyncOutcome, SyncPolicy};
