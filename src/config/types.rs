//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Path overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PathsConfig {
    /// Checkout whose build outputs are deployed
    #[serde(default)]
    pub build_root: Option<PathBuf>,

    /// Staging prefix prepended to every absolute target
    #[serde(default)]
    pub destdir: Option<PathBuf>,
}

/// Platform override
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlatformConfig {
    /// OS identifier used instead of the host's (`linux`, `darwin`)
    #[serde(default, rename = "override")]
    pub os_override: Option<String>,
}

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Installer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeployConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub platform: PlatformConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
