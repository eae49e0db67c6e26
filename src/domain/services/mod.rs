//! Domain Services
//!
//! One service per deployment step. Each is generic over the `FileSystem`
//! port and holds no state between calls.

mod permissions;
mod provisioner;
mod sync_engine;
mod validator;

pub use permissions::PermissionSetter;
pub use provisioner::{distinct_target_dirs, DirectoryProvisioner};
pub use sync_engine::SyncPolicyEngine;
pub use validator::SourceValidator;
