//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
#[cfg(test)]
pub(crate) mod mock;

pub use local::{contents_equal, LocalFs};
