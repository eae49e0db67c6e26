//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod file_system;
pub mod platform_detector;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use file_system::FileSystem;
pub use platform_detector::PlatformDetector;
