//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `events/` - Event sink implementations
//! - `platform` - Host platform detection

pub mod events;
pub mod fs;
pub mod platform;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use platform::HostPlatform;
