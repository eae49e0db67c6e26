//! Preflight validation of source files

use crate::domain::entities::DeploymentItem;
use crate::domain::ports::{DeployEvent, DeployEventSink, FileSystem};
use crate::error::{DeployError, DeployResult};

/// Checks that every declared source exists before anything is written.
///
/// Read-only. Stops at the first missing source.
pub struct SourceValidator<F> {
    fs: F,
}

impl<F: FileSystem> SourceValidator<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Validate every item's source, in declared order.
    pub fn validate_all(
        &self,
        items: &[DeploymentItem],
        events: &dyn DeployEventSink,
    ) -> DeployResult<()> {
        for item in items {
            if !self.fs.is_file(&item.source_path) {
                events.on_event(DeployEvent::SourceMissing {
                    item: item.name.clone(),
                    path: item.source_path.clone(),
                });
                return Err(DeployError::MissingSource {
                    path: item.source_path.clone(),
                });
            }
            events.on_event(DeployEvent::SourceFound {
                item: item.name.clone(),
                path: item.source_path.clone(),
            });
        }
        Ok(())
    }
}
