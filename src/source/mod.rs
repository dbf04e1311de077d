//! Module source analysis
//!
//! This module provides:
//! - Pattern matchers for the source string conventions Terraform accepts
//! - The classifier that turns a source into a datasource, name and version

mod classifier;
mod patterns;

pub use classifier::{classify, classify_dependency, Classification, ModuleRef};
pub use patterns::{GenericVcsRef, HostedRepoRef, HostnamePrefix};
