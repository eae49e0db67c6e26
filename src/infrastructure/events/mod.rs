//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The console sink lives in the binary next to the rest of the terminal UI.

mod json;

pub use json::JsonEventSink;
