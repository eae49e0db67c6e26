//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::DeployUseCase;
use crate::config::{DeployConfig, DeployLayout};
use crate::infrastructure::{HostPlatform, LocalFs};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<LocalFs, HostPlatform>;

/// Build the layout from resolved configuration.
///
/// Without an explicit build root the installer assumes it runs from the
/// repository's `scripts/` directory.
pub fn resolve_layout(config: &DeployConfig, cwd: &Path) -> DeployLayout {
    let layout = match &config.paths.build_root {
        Some(root) => DeployLayout::new(root.clone()),
        None => DeployLayout::from_working_dir(cwd),
    };
    layout.with_destdir(config.paths.destdir.clone())
}

/// Create a deploy use case against the local disk and host platform
pub fn create_deploy_use_case(
    layout: &DeployLayout,
    config: &DeployConfig,
) -> ConcreteDeployUseCase {
    let detector = HostPlatform::with_override(config.platform.os_override.clone());
    DeployUseCase::new(LocalFs::new(), detector, layout.items())
}
