//! Terraform file detection and dependency extraction
//!
//! This module provides functionality to:
//! - Detect `.tf` files in a directory tree
//! - Extract the attributes of a single block
//! - Tag module blocks and classify their sources

mod block;
mod detector;
mod module;
mod terraform;

pub use block::{extract_block, ExtractionResult};
pub use detector::{detect_terraform_files, is_terraform_file, TERRAFORM_EXTENSION};
pub use module::extract_module_dependencies;
pub use terraform::extract_package_file;

use crate::domain::PackageDependency;
use crate::error::ExtractError;
use std::path::Path;

/// Read a Terraform file and extract its module dependencies
pub fn parse_terraform_file(path: &Path) -> Result<Vec<PackageDependency>, ExtractError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ExtractError::read_error(path, e))?;
    extract_package_file(&content)
}
