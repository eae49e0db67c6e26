//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Flags and how they override the loaded configuration
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use raspberry_web_deploy::presentation::factory;
//!
//! let layout = factory::resolve_layout(&config, &cwd);
//! let use_case = factory::create_deploy_use_case(&layout, &config);
//! let report = use_case.execute_with_events(sink)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_deploy_use_case, resolve_layout, ConcreteDeployUseCase};
