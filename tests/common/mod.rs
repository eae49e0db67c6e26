//! Common test utilities for installer CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated build root and staging prefix in temp directories
//! - Assertion macros: `assert_installed!`, `assert_not_installed!`
//! - Fixtures: Source paths and file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
pub use fixtures::*;
