//! Deploy run report

use std::path::PathBuf;

use crate::domain::value_objects::{DeployState, DirStatus, FileMode, Platform, SyncOutcome};

/// What happened to one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Synced(SyncOutcome),
    ExcludedByPlatform,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub item: String,
    pub target: PathBuf,
    pub status: ItemStatus,
    /// Set only when the item was copied
    pub mode_applied: Option<FileMode>,
}

impl ItemOutcome {
    pub fn copied(&self) -> bool {
        matches!(self.status, ItemStatus::Synced(outcome) if outcome.copied())
    }
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub platform: Platform,
    pub directories: Vec<(PathBuf, DirStatus)>,
    pub items: Vec<ItemOutcome>,
    pub final_state: DeployState,
}

impl DeployReport {
    pub(crate) fn new(platform: Platform) -> Self {
        Self {
            platform,
            directories: Vec::new(),
            items: Vec::new(),
            final_state: DeployState::Init,
        }
    }

    pub fn outcome(&self, item: &str) -> Option<&ItemOutcome> {
        self.items.iter().find(|o| o.item == item)
    }

    pub fn copied_count(&self) -> usize {
        self.items.iter().filter(|o| o.copied()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.items
            .iter()
            .filter(|o| matches!(o.status, ItemStatus::Synced(s) if !s.copied()))
            .count()
    }

    pub fn excluded_count(&self) -> usize {
        self.items
            .iter()
            .filter(|o| o.status == ItemStatus::ExcludedByPlatform)
            .count()
    }

    pub fn created_dir_count(&self) -> usize {
        self.directories
            .iter()
            .filter(|(_, status)| *status == DirStatus::Created)
            .count()
    }
}
