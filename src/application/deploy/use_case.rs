//! Deploy Use Case
//!
//! Orchestrates one installer run:
//! 1. Detect the platform
//! 2. Validate every source (nothing is written before this passes)
//! 3. Provision target directories
//! 4. Sync each item in declared order, setting modes after copies
//! 5. Sync platform-gated items
//!
//! This use case is pure orchestration - all business logic lives in domain services.

use std::sync::Arc;

use crate::domain::entities::DeploymentItem;
use crate::domain::ports::{
    DeployEvent, DeployEventSink, FileSystem, NoopEventSink, PlatformDetector,
};
use crate::domain::services::{
    distinct_target_dirs, DirectoryProvisioner, PermissionSetter, SourceValidator,
    SyncPolicyEngine,
};
use crate::domain::value_objects::{DeployState, FailureKind, Platform};
use crate::error::{DeployError, DeployResult};

use super::report::{DeployReport, ItemOutcome, ItemStatus};

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so it runs unchanged against the local disk
/// or an in-memory file system with a fixed platform.
pub struct DeployUseCase<FS, PD>
where
    FS: FileSystem,
    PD: PlatformDetector,
{
    file_system: FS,
    detector: PD,
    items: Vec<DeploymentItem>,
}

/// Tracks the state machine for one run and reports transitions.
struct Run<'a> {
    state: DeployState,
    events: &'a dyn DeployEventSink,
}

impl<'a> Run<'a> {
    fn new(events: &'a dyn DeployEventSink) -> Self {
        Self {
            state: DeployState::Init,
            events,
        }
    }

    fn transition(&mut self, next: DeployState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        let from = self.state;
        self.state = next;
        if self.events.wants_state_events() {
            self.events
                .on_event(DeployEvent::StateChanged { from, to: next });
        }
    }

    fn fail(&mut self, err: &DeployError) {
        if !self.state.is_terminal() {
            self.transition(DeployState::Failed(FailureKind::from(err)));
        }
    }
}

impl<FS, PD> DeployUseCase<FS, PD>
where
    FS: FileSystem,
    PD: PlatformDetector,
{
    pub fn new(file_system: FS, detector: PD, items: Vec<DeploymentItem>) -> Self {
        Self {
            file_system,
            detector,
            items,
        }
    }

    pub fn items(&self) -> &[DeploymentItem] {
        &self.items
    }

    /// Execute the deploy use case silently
    pub fn execute(&self) -> DeployResult<DeployReport> {
        self.execute_with_events(Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    ///
    /// On failure the sink sees `ItemFailed` for the offending item (when the
    /// failure happened while processing one) followed by a transition to
    /// `Failed`. Items completed before the failure stay applied.
    pub fn execute_with_events(
        &self,
        events: Arc<dyn DeployEventSink>,
    ) -> DeployResult<DeployReport> {
        let mut run = Run::new(events.as_ref());
        match self.run(&mut run) {
            Ok(report) => Ok(report),
            Err(err) => {
                run.fail(&err);
                Err(err)
            }
        }
    }

    fn run(&self, run: &mut Run<'_>) -> DeployResult<DeployReport> {
        let events = run.events;

        // Init
        let platform = self.detector.detect()?;
        events.on_event(DeployEvent::PlatformDetected { platform });
        let mut report = DeployReport::new(platform);

        run.transition(DeployState::Validating);
        SourceValidator::new(&self.file_system).validate_all(&self.items, events)?;

        run.transition(DeployState::ProvisioningDirs);
        let provisioner = DirectoryProvisioner::new(&self.file_system);
        let eligible = self.items.iter().filter(|item| platform.supports(item));
        for dir in distinct_target_dirs(eligible) {
            let status = provisioner.ensure_directory(&dir)?;
            events.on_event(DeployEvent::DirectoryReady {
                path: dir.clone(),
                status,
            });
            report.directories.push((dir, status));
        }

        run.transition(DeployState::Syncing);
        let (gated, ungated): (Vec<&DeploymentItem>, Vec<&DeploymentItem>) =
            self.items.iter().partition(|item| item.is_platform_gated());

        for item in ungated {
            report.items.push(self.process_item(item, platform, events)?);
        }

        if !gated.is_empty() {
            run.transition(DeployState::PlatformGatedStep);
            for item in gated {
                report.items.push(self.process_item(item, platform, events)?);
            }
        }

        run.transition(DeployState::Done);
        report.final_state = DeployState::Done;
        events.on_event(DeployEvent::Completed {
            copied_count: report.copied_count(),
            skipped_count: report.skipped_count(),
            excluded_count: report.excluded_count(),
        });

        Ok(report)
    }

    fn process_item(
        &self,
        item: &DeploymentItem,
        platform: Platform,
        events: &dyn DeployEventSink,
    ) -> DeployResult<ItemOutcome> {
        if !platform.supports(item) {
            events.on_event(DeployEvent::ItemExcluded {
                item: item.name.clone(),
                target: item.target_path.clone(),
                platform,
            });
            return Ok(ItemOutcome {
                item: item.name.clone(),
                target: item.target_path.clone(),
                status: ItemStatus::ExcludedByPlatform,
                mode_applied: None,
            });
        }

        self.sync_item(item, events).inspect_err(|err| {
            events.on_event(DeployEvent::ItemFailed {
                item: item.name.clone(),
                error: err.to_string(),
            });
        })
    }

    fn sync_item(
        &self,
        item: &DeploymentItem,
        events: &dyn DeployEventSink,
    ) -> DeployResult<ItemOutcome> {
        let outcome = SyncPolicyEngine::new(&self.file_system).sync(item)?;
        events.on_event(DeployEvent::ItemSynced {
            item: item.name.clone(),
            target: item.target_path.clone(),
            outcome,
        });

        let mut mode_applied = None;
        if outcome.copied() {
            PermissionSetter::new(&self.file_system)
                .apply_mode(&item.target_path, item.mode)?;
            events.on_event(DeployEvent::PermissionsApplied {
                item: item.name.clone(),
                target: item.target_path.clone(),
                mode: item.mode,
            });
            mode_applied = Some(item.mode);
        }

        Ok(ItemOutcome {
            item: item.name.clone(),
            target: item.target_path.clone(),
            status: ItemStatus::Synced(outcome),
            mode_applied,
        })
    }
}
