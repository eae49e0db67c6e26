//! Platform value object - the closed set of hosts the installer runs on
//!
//! - `Linux`: primary platform, receives the systemd unit
//! - `Darwin`: supported for development installs, no service manager step

use serde::{Deserialize, Serialize};

use crate::domain::entities::DeploymentItem;
use crate::error::{DeployError, DeployResult};

/// Supported host operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux (Raspberry Pi OS and friends)
    Linux,
    /// macOS
    Darwin,
}

impl Platform {
    /// Map an operating system identifier to a supported platform.
    ///
    /// Accepts both Rust's `std::env::consts::OS` values (`linux`, `macos`)
    /// and `uname`-style names (`Linux`, `Darwin`).
    pub fn from_os_name(name: &str) -> DeployResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::Darwin),
            _ => Err(DeployError::UnsupportedPlatform {
                platform: name.trim().to_string(),
            }),
        }
    }

    /// Whether `item` is deployed on this platform.
    pub fn supports(&self, item: &DeploymentItem) -> bool {
        item.platform_restriction.is_none_or(|allowed| allowed.contains(*self))
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::Darwin => "Darwin",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Platform::Linux => 0b01,
            Platform::Darwin => 0b10,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Set of platforms an item is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformSet(u8);

impl PlatformSet {
    /// Set containing a single platform
    pub const fn only(platform: Platform) -> Self {
        match platform {
            Platform::Linux => Self(0b01),
            Platform::Darwin => Self(0b10),
        }
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.0 & platform.bit() != 0
    }
}
