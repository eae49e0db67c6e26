//! Deployment layout - where every item comes from and where it goes
//!
//! Built once at startup and passed down; nothing reads these paths from
//! global state.

use std::path::{Path, PathBuf};

use crate::domain::entities::DeploymentItem;
use crate::domain::value_objects::{ItemRole, Platform, PlatformSet, SyncPolicy};

struct ItemSpec {
    role: ItemRole,
    source: &'static str,
    target: &'static str,
    policy: SyncPolicy,
    platforms: Option<PlatformSet>,
}

/// Fixed item table, in processing order.
const ITEMS: [ItemSpec; 4] = [
    ItemSpec {
        role: ItemRole::Binary,
        source: "target/release/raspberry-web",
        target: "/usr/local/bin/raspberry-web",
        policy: SyncPolicy::OverwriteIfDifferent,
        platforms: None,
    },
    ItemSpec {
        role: ItemRole::Config,
        source: "config/configuration.toml",
        target: "/usr/local/raspberry-web/configuration.toml",
        policy: SyncPolicy::CreateIfAbsent,
        platforms: None,
    },
    ItemSpec {
        role: ItemRole::Database,
        source: "raspberry-web-db/raspberry-web.sqlite",
        target: "/usr/local/raspberry-web/database/raspberry-web.sqlite",
        policy: SyncPolicy::CreateIfAbsent,
        platforms: None,
    },
    ItemSpec {
        role: ItemRole::ServiceUnit,
        source: "config/raspberry-web.service",
        target: "/etc/systemd/system/raspberry-web.service",
        policy: SyncPolicy::CreateIfAbsent,
        platforms: Some(PlatformSet::only(Platform::Linux)),
    },
];

/// Source root plus optional staging prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployLayout {
    build_root: PathBuf,
    destdir: Option<PathBuf>,
}

impl DeployLayout {
    pub fn new(build_root: impl Into<PathBuf>) -> Self {
        Self {
            build_root: build_root.into(),
            destdir: None,
        }
    }

    /// Layout for an installer started from the repository's `scripts/`
    /// directory: the build root is the parent of `cwd`.
    pub fn from_working_dir(cwd: &Path) -> Self {
        Self::new(cwd.parent().unwrap_or(cwd))
    }

    pub fn with_destdir(mut self, destdir: Option<PathBuf>) -> Self {
        self.destdir = destdir;
        self
    }

    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    pub fn destdir(&self) -> Option<&Path> {
        self.destdir.as_deref()
    }

    /// Resolve a fixed absolute target, honoring the staging prefix.
    pub fn target_path(&self, absolute: &str) -> PathBuf {
        match &self.destdir {
            Some(destdir) => destdir.join(absolute.trim_start_matches('/')),
            None => PathBuf::from(absolute),
        }
    }

    /// All deployment items, in processing order.
    pub fn items(&self) -> Vec<DeploymentItem> {
        ITEMS
            .iter()
            .map(|spec| {
                let item = DeploymentItem::for_role(
                    spec.role,
                    self.build_root.join(spec.source),
                    self.target_path(spec.target),
                    spec.policy,
                );
                match spec.platforms {
                    Some(platforms) => item.restricted_to(platforms),
                    None => item,
                }
            })
            .collect()
    }
}
