//! Domain Layer
//!
//! The deployment engine without I/O of its own.
//!
//! ## Structure
//!
//! - `entities/` - `DeploymentItem`
//! - `value_objects/` - Immutable value types (Platform, SyncPolicy, FileMode)
//! - `services/` - Validator, provisioner, sync policy engine, permission setter
//! - `ports/` - Interface definitions for infrastructure
//!
//! All filesystem access goes through the `FileSystem` port and all reporting
//! through `DeployEventSink`, so every service runs against in-memory fakes.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
