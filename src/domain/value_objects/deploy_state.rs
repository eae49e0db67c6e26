//! Run states of the deploy orchestrator

use crate::error::DeployError;

/// Category of the error that ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    UnsupportedPlatform,
    MissingSource,
    DirectoryCreateFailed,
    CopyFailed,
    PermissionSetFailed,
    InvalidConfig,
    Io,
}

impl From<&DeployError> for FailureKind {
    fn from(err: &DeployError) -> Self {
        match err {
            DeployError::UnsupportedPlatform { .. } => FailureKind::UnsupportedPlatform,
            DeployError::MissingSource { .. } => FailureKind::MissingSource,
            DeployError::DirectoryCreateFailed { .. } => FailureKind::DirectoryCreateFailed,
            DeployError::CopyFailed { .. } => FailureKind::CopyFailed,
            DeployError::PermissionSetFailed { .. } => FailureKind::PermissionSetFailed,
            DeployError::InvalidConfig { .. } => FailureKind::InvalidConfig,
            DeployError::Io(_) => FailureKind::Io,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FailureKind::UnsupportedPlatform => "unsupported platform",
            FailureKind::MissingSource => "missing source",
            FailureKind::DirectoryCreateFailed => "directory create failed",
            FailureKind::CopyFailed => "copy failed",
            FailureKind::PermissionSetFailed => "permission set failed",
            FailureKind::InvalidConfig => "invalid config",
            FailureKind::Io => "io error",
        };
        f.write_str(s)
    }
}

/// Orchestrator state.
///
/// `Init -> Validating -> ProvisioningDirs -> Syncing -> PlatformGatedStep -> Done`;
/// `Failed` is reachable from every non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployState {
    Init,
    Validating,
    ProvisioningDirs,
    Syncing,
    PlatformGatedStep,
    Done,
    Failed(FailureKind),
}

impl DeployState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeployState::Done | DeployState::Failed(_))
    }

    /// Whether the machine may move from `self` to `next`.
    pub fn can_transition_to(&self, next: DeployState) -> bool {
        use DeployState::*;
        match (self, next) {
            (Done | Failed(_), _) => false,
            (_, Failed(_)) => true,
            (Init, Validating)
            | (Validating, ProvisioningDirs)
            | (ProvisioningDirs, Syncing)
            | (Syncing, PlatformGatedStep)
            | (Syncing, Done)
            | (PlatformGatedStep, Done) => true,
            _ => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeployState::Init => "init",
            DeployState::Validating => "validating",
            DeployState::ProvisioningDirs => "provisioning-dirs",
            DeployState::Syncing => "syncing",
            DeployState::PlatformGatedStep => "platform-gated-step",
            DeployState::Done => "done",
            DeployState::Failed(_) => "failed",
        }
    }
}

impl std::fmt::Display for DeployState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeployState::Failed(kind) => write!(f, "failed ({})", kind),
            other => f.write_str(other.label()),
        }
    }
}
