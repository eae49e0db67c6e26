//! Sync policy engine
//!
//! Decides, per item, whether the source is copied over the target.
//! `OverwriteIfDifferent` is the only policy that can replace existing bytes.

use std::path::Path;

use crate::domain::entities::DeploymentItem;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{CopyKind, SkipReason, SyncOutcome, SyncPolicy};
use crate::error::{DeployError, DeployResult};

pub struct SyncPolicyEngine<F> {
    fs: F,
}

impl<F: FileSystem> SyncPolicyEngine<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Apply the item's own policy.
    pub fn sync(&self, item: &DeploymentItem) -> DeployResult<SyncOutcome> {
        match item.policy {
            SyncPolicy::OverwriteIfDifferent => {
                self.sync_overwrite_if_different(&item.source_path, &item.target_path)
            }
            SyncPolicy::CreateIfAbsent => {
                self.sync_create_if_absent(&item.source_path, &item.target_path)
            }
        }
    }

    /// Copy when `target` is missing or differs byte-for-byte from `source`.
    pub fn sync_overwrite_if_different(
        &self,
        source: &Path,
        target: &Path,
    ) -> DeployResult<SyncOutcome> {
        if !self.fs.is_file(target) {
            self.copy(source, target)?;
            return Ok(SyncOutcome::Copied(CopyKind::NewFile));
        }

        let identical = self
            .fs
            .contents_equal(source, target)
            .map_err(|cause| copy_failed(source, target, cause))?;

        if identical {
            return Ok(SyncOutcome::Skipped(SkipReason::Unchanged));
        }

        self.copy(source, target)?;
        Ok(SyncOutcome::Copied(CopyKind::NewVersion))
    }

    /// Copy only when `target` is missing; an existing target is never read.
    pub fn sync_create_if_absent(
        &self,
        source: &Path,
        target: &Path,
    ) -> DeployResult<SyncOutcome> {
        if self.fs.is_file(target) {
            return Ok(SyncOutcome::Skipped(SkipReason::AlreadyPresent));
        }

        self.copy(source, target)?;
        Ok(SyncOutcome::Copied(CopyKind::NewFile))
    }

    fn copy(&self, source: &Path, target: &Path) -> DeployResult<()> {
        self.fs
            .copy_file(source, target)
            .map_err(|cause| copy_failed(source, target, cause))
    }
}

fn copy_failed(source: &Path, target: &Path, cause: std::io::Error) -> DeployError {
    DeployError::CopyFailed {
        from: source.to_path_buf(),
        to: target.to_path_buf(),
        cause,
    }
}
