//! DeploymentItem entity - one file managed by the installer

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{FileMode, ItemRole, PlatformSet, SyncPolicy};

/// One (source, target, policy, mode) tuple.
///
/// Identity is the `(source_path, target_path)` pair. Items are built once
/// from the layout at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentItem {
    pub name: String,
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    pub policy: SyncPolicy,
    pub mode: FileMode,
    /// `None` means every supported platform
    pub platform_restriction: Option<PlatformSet>,
}

impl DeploymentItem {
    /// Build an item for a role, taking the role's name and default mode.
    pub fn for_role(
        role: ItemRole,
        source_path: impl Into<PathBuf>,
        target_path: impl Into<PathBuf>,
        policy: SyncPolicy,
    ) -> Self {
        Self {
            name: role.name().to_string(),
            source_path: source_path.into(),
            target_path: target_path.into(),
            policy,
            mode: role.default_mode(),
            platform_restriction: None,
        }
    }

    /// Restrict the item to a set of platforms
    pub fn restricted_to(mut self, platforms: PlatformSet) -> Self {
        self.platform_restriction = Some(platforms);
        self
    }

    /// Directory the target file lives in
    pub fn target_dir(&self) -> Option<&Path> {
        self.target_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn is_platform_gated(&self) -> bool {
        self.platform_restriction.is_some()
    }
}
