//! Domain Entities

mod deployment_item;

pub use deployment_item::DeploymentItem;
