//! Module block extraction
//!
//! Wraps the generic block extractor and tags its output as module dependencies.

use crate::domain::DependencyKind;
use crate::error::ExtractError;
use crate::manifest::block::{extract_block, ExtractionResult};

/// Extract the dependencies of a `module "<module_name>"` block
pub fn extract_module_dependencies(
    block_start: usize,
    lines: &[&str],
    module_name: &str,
) -> Result<ExtractionResult, ExtractError> {
    let mut result = extract_block(block_start, lines, module_name)?;
    for dep in &mut result.dependencies {
        dep.manager_data.dependency_kind = DependencyKind::Module;
    }
    Ok(result)
}
