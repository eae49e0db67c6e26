//! Sync policy and the outcomes it produces

/// Rule governing whether an existing target is overwritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncPolicy {
    /// Copy when the target is missing or its bytes differ from the source.
    /// Reserved for artifacts that legitimately change between runs.
    OverwriteIfDifferent,
    /// Copy only when the target is missing. The target is user-owned
    /// after first deployment and is never compared or rewritten.
    CreateIfAbsent,
}

impl std::fmt::Display for SyncPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncPolicy::OverwriteIfDifferent => write!(f, "overwrite-if-different"),
            SyncPolicy::CreateIfAbsent => write!(f, "create-if-absent"),
        }
    }
}

/// Why a copy happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    /// Target did not exist
    NewFile,
    /// Target existed with different content and was replaced
    NewVersion,
}

/// Why a copy did not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Target content is byte-identical to the source
    Unchanged,
    /// Target exists and the policy forbids touching it
    AlreadyPresent,
}

/// Result of applying a sync policy to one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Copied(CopyKind),
    Skipped(SkipReason),
}

impl SyncOutcome {
    /// The two-valued contract: did bytes land on the target?
    pub fn copied(&self) -> bool {
        matches!(self, SyncOutcome::Copied(_))
    }
}

/// Result of provisioning a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}
