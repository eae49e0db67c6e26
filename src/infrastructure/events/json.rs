//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::{CopyKind, DirStatus, SkipReason, SyncOutcome};
use chrono::{SecondsFormat, Utc};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(obj) = event.as_object_mut() {
            obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn outcome_fields(outcome: SyncOutcome) -> (&'static str, &'static str) {
    match outcome {
        SyncOutcome::Copied(CopyKind::NewFile) => ("copied", "new_file"),
        SyncOutcome::Copied(CopyKind::NewVersion) => ("copied", "new_version"),
        SyncOutcome::Skipped(SkipReason::Unchanged) => ("skipped", "unchanged"),
        SyncOutcome::Skipped(SkipReason::AlreadyPresent) => ("skipped", "already_present"),
    }
}

fn dir_status(status: DirStatus) -> &'static str {
    match status {
        DirStatus::Created => "created",
        DirStatus::AlreadyExists => "already_exists",
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::StateChanged { from, to } => {
                serde_json::json!({
                    "event": "state",
                    "from": from.to_string(),
                    "to": to.to_string(),
                })
            }

            DeployEvent::PlatformDetected { platform } => {
                serde_json::json!({
                    "event": "platform",
                    "platform": platform,
                })
            }

            DeployEvent::SourceFound { item, path } => {
                serde_json::json!({
                    "event": "source_found",
                    "item": item,
                    "path": path.display().to_string(),
                })
            }

            DeployEvent::SourceMissing { item, path } => {
                serde_json::json!({
                    "event": "source_missing",
                    "item": item,
                    "path": path.display().to_string(),
                })
            }

            DeployEvent::DirectoryReady { path, status } => {
                serde_json::json!({
                    "event": "directory",
                    "path": path.display().to_string(),
                    "status": dir_status(status),
                })
            }

            DeployEvent::ItemSynced {
                item,
                target,
                outcome,
            } => {
                let (result, reason) = outcome_fields(outcome);
                serde_json::json!({
                    "event": "item_synced",
                    "item": item,
                    "target": target.display().to_string(),
                    "result": result,
                    "reason": reason,
                })
            }

            DeployEvent::ItemExcluded {
                item,
                target,
                platform,
            } => {
                serde_json::json!({
                    "event": "item_excluded",
                    "item": item,
                    "target": target.display().to_string(),
                    "platform": platform,
                })
            }

            DeployEvent::PermissionsApplied { item, target, mode } => {
                serde_json::json!({
                    "event": "permissions",
                    "item": item,
                    "target": target.display().to_string(),
                    "mode": mode.to_string(),
                })
            }

            DeployEvent::ItemFailed { item, error } => {
                serde_json::json!({
                    "event": "item_error",
                    "item": item,
                    "error": error,
                })
            }

            DeployEvent::Completed {
                copied_count,
                skipped_count,
                excluded_count,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "status": "success",
                    "copied": copied_count,
                    "skipped": skipped_count,
                    "excluded": excluded_count,
                })
            }
        };

        self.write_event(json);
    }
}
