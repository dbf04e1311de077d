//! Terraform file extractor
//!
//! Handles:
//! - `module "<name>" {` blocks (extracted and classified)
//! - every other block kind (skipped)
//! - `#` and `//` comment lines

use crate::domain::PackageDependency;
use crate::error::ExtractError;
use crate::manifest::block::strip_comment;
use crate::manifest::module::extract_module_dependencies;
use crate::source::classify_dependency;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Single-label block header: kind "label" {, matched with its comment removed
static BLOCK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?P<kind>[a-z_]+)\s+"(?P<label>[^"]+)"\s*\{\s*$"#).unwrap()
});

const MODULE_BLOCK: &str = "module";

/// Extract and classify all module dependencies declared in `content`
pub fn extract_package_file(content: &str) -> Result<Vec<PackageDependency>, ExtractError> {
    let lines: Vec<&str> = content.lines().collect();
    let mut dependencies = Vec::new();

    let mut line_number = 0;
    while line_number < lines.len() {
        let code = strip_comment(lines[line_number]);

        if !code.trim().is_empty() {
            if let Some(caps) = BLOCK_HEADER_RE.captures(code) {
                let kind = caps.name("kind").map(|m| m.as_str()).unwrap_or("");
                let label = caps.name("label").map(|m| m.as_str()).unwrap_or("");

                if kind == MODULE_BLOCK {
                    let result = extract_module_dependencies(line_number, &lines, label)?;
                    line_number = result.line_number;
                    dependencies.extend(result.dependencies);
                } else {
                    debug!(kind, label, line = line_number + 1, "skipping block");
                }
            }
        }

        line_number += 1;
    }

    for dep in dependencies.iter_mut().filter(|d| d.is_module()) {
        classify_dependency(dep);
    }

    Ok(dependencies)
}
