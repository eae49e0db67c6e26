//! Platform detection port
//!
//! The orchestrator asks this port which platform it runs on, so tests can
//! inject a fixed platform instead of the host's.

use crate::domain::value_objects::Platform;
use crate::error::DeployResult;

pub trait PlatformDetector {
    /// Identify the platform, failing with `UnsupportedPlatform` for
    /// anything outside the supported set.
    fn detect(&self) -> DeployResult<Platform>;
}

/// A known platform detects as itself.
impl PlatformDetector for Platform {
    fn detect(&self) -> DeployResult<Platform> {
        Ok(*self)
    }
}
