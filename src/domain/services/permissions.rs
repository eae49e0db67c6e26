//! Mode bits for freshly copied targets

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::FileMode;
use crate::error::{DeployError, DeployResult};

/// Applies an item's fixed mode. Only called after a copy; skipped
/// targets keep whatever permissions they already have.
pub struct PermissionSetter<F> {
    fs: F,
}

impl<F: FileSystem> PermissionSetter<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn apply_mode(&self, target: &Path, mode: FileMode) -> DeployResult<()> {
        self.fs
            .set_mode(target, mode)
            .map_err(|cause| DeployError::PermissionSetFailed {
                path: target.to_path_buf(),
                cause,
            })
    }
}
