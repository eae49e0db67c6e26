//! Deploy Module
//!
//! Orchestrates one installer run.
//!
//! ## Structure
//!
//! - `report` - Result types (`DeployReport`, `ItemOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use raspberry_web_deploy::application::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(LocalFs::new(), HostPlatform::new(), layout.items());
//! let report = use_case.execute_with_events(sink)?;
//! ```

mod report;
mod use_case;

pub use report::{DeployReport, ItemOutcome, ItemStatus};
pub use use_case::DeployUseCase;
