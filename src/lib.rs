//! tfmod - Terraform module source classifier library
//!
//! This library classifies the `source` of Terraform `module` blocks into the
//! datasource that can resolve its versions:
//! - GitHub tags for `github.com` shorthand pinned with `?ref=`
//! - Git tags for generic VCS URLs pinned with `?ref=`
//! - Terraform Registry for `[host/]namespace/name/provider` addresses
//!
//! Relative paths and missing sources are reported as skipped.

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod scanner;
pub mod source;
