//! Target directory provisioning

use std::path::{Path, PathBuf};

use crate::domain::entities::DeploymentItem;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::DirStatus;
use crate::error::{DeployError, DeployResult};

/// Creates target directories (with parents) when absent.
pub struct DirectoryProvisioner<F> {
    fs: F,
}

impl<F: FileSystem> DirectoryProvisioner<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Make sure `path` exists as a directory.
    ///
    /// A non-directory already sitting at `path` is reported as
    /// `DirectoryCreateFailed`, never replaced.
    pub fn ensure_directory(&self, path: &Path) -> DeployResult<DirStatus> {
        if self.fs.is_dir(path) {
            return Ok(DirStatus::AlreadyExists);
        }

        self.fs
            .create_dir_all(path)
            .map_err(|cause| DeployError::DirectoryCreateFailed {
                path: path.to_path_buf(),
                cause,
            })?;

        Ok(DirStatus::Created)
    }
}

/// Distinct target directories of `items`, in first-seen order.
pub fn distinct_target_dirs<'a>(
    items: impl IntoIterator<Item = &'a DeploymentItem>,
) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for dir in items.into_iter().filter_map(DeploymentItem::target_dir) {
        if !dirs.iter().any(|d| d == dir) {
            dirs.push(dir.to_path_buf());
        }
    }
    dirs
}
