//! Configuration module
//!
//! Settings are resolved in this order (later wins):
//! 1. Built-in defaults
//! 2. Config file (`--config`, `RWDEPLOY_CONFIG`, or `./rwdeploy.toml`)
//! 3. Environment variables (RWDEPLOY_*)
//! 4. CLI flags
//!
//! The resolved paths become a `DeployLayout`, which yields the item table.

mod layout;
mod loader;
mod types;

pub use layout::DeployLayout;
pub use loader::{
    load_or_default, with_env_overrides, ConfigWarning, DEFAULT_CONFIG_FILE, ENV_BUILD_ROOT,
    ENV_CONFIG, ENV_DESTDIR, ENV_PLATFORM,
};
pub use types::{ColorMode, DeployConfig, OutputConfig, PathsConfig, PlatformConfig};
