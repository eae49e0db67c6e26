//! Host platform detection

use crate::domain::ports::PlatformDetector;
use crate::domain::value_objects::Platform;
use crate::error::DeployResult;

/// Reads `std::env::consts::OS`, unless an override identifier is set.
#[derive(Debug, Clone, Default)]
pub struct HostPlatform {
    os_override: Option<String>,
}

impl HostPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(os_override: Option<String>) -> Self {
        Self { os_override }
    }

    /// Identifier that will be classified
    pub fn os_name(&self) -> &str {
        self.os_override
            .as_deref()
            .unwrap_or(std::env::consts::OS)
    }
}

impl PlatformDetector for HostPlatform {
    fn detect(&self) -> DeployResult<Platform> {
        Platform::from_os_name(self.os_name())
    }
}
