//! Core domain models for tfmod
//!
//! This module contains the fundamental types used throughout the application:
//! - Datasource identifiers for version resolution backends
//! - Skip reasons for unresolvable dependencies
//! - Dependency records produced by extraction and filled in by classification
//! - Summary and result structures

mod datasource;
mod dependency;
mod skip_reason;
mod summary;

pub use datasource::Datasource;
pub use dependency::{
    DependencyKind, DependencyStatus, ManagerData, PackageDependency, MODULE_DEP_TYPE,
};
pub use skip_reason::SkipReason;
pub use summary::{FileScanResult, ScanSummary};
