//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! The engine reports every check and action here instead of printing,
//! so console output, NDJSON and silence are interchangeable.

use std::path::PathBuf;

use crate::domain::value_objects::{DeployState, DirStatus, FileMode, Platform, SyncOutcome};

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Orchestrator moved to a new state
    StateChanged { from: DeployState, to: DeployState },

    /// Host platform identified
    PlatformDetected { platform: Platform },

    /// Source file exists
    SourceFound { item: String, path: PathBuf },

    /// Source file is missing; the run is about to abort
    SourceMissing { item: String, path: PathBuf },

    /// Target directory is in place
    DirectoryReady { path: PathBuf, status: DirStatus },

    /// Sync policy applied to an item
    ItemSynced {
        item: String,
        target: PathBuf,
        outcome: SyncOutcome,
    },

    /// Item not deployed on this platform
    ItemExcluded {
        item: String,
        target: PathBuf,
        platform: Platform,
    },

    /// Mode bits applied after a copy
    PermissionsApplied {
        item: String,
        target: PathBuf,
        mode: FileMode,
    },

    /// Processing of an item failed; the run stops here
    ItemFailed { item: String, error: String },

    /// Deploy completed
    Completed {
        copied_count: usize,
        skipped_count: usize,
        excluded_count: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `ConsoleEventSink` (binary): status lines in the terminal
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants state transition events
    fn wants_state_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_state_events(&self) -> bool {
        false
    }
}
