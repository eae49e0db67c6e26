//! Error types for raspberry-web-deploy
//!
//! Every variant is fatal to a run. `UnsupportedPlatform` and `MissingSource`
//! are raised before the first filesystem write; the rest can occur mid-run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Host operating system is not Linux or Darwin
    #[error("platform '{platform}' is not supported")]
    UnsupportedPlatform { platform: String },

    /// A declared source file does not exist (or is not a regular file)
    #[error("source file not present: {path}")]
    MissingSource { path: PathBuf },

    /// A target directory could not be created
    #[error("failed to create directory {path}: {cause}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    /// Comparing or copying a file failed
    #[error("failed to copy {from} to {to}: {cause}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    /// Mode bits could not be applied to a copied file
    #[error("failed to set permissions on {path}: {cause}")]
    PermissionSetFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    /// Installer configuration file is malformed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error outside of a deployment step (e.g. reading the config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// True for errors raised before anything on disk was touched.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            DeployError::UnsupportedPlatform { .. }
                | DeployError::MissingSource { .. }
                | DeployError::InvalidConfig { .. }
        )
    }

    /// Path most relevant to the failure, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DeployError::MissingSource { path }
            | DeployError::DirectoryCreateFailed { path, .. }
            | DeployError::PermissionSetFailed { path, .. } => Some(path),
            DeployError::CopyFailed { to, .. } => Some(to),
            DeployError::InvalidConfig { file, .. } => Some(file),
            DeployError::UnsupportedPlatform { .. } | DeployError::Io(_) => None,
        }
    }
}
