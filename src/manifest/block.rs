//! Generic line-based block extractor
//!
//! Reads the top-level `key = "value"` attributes of a single Terraform block:
//! - `source` is kept in `manager_data.source`
//! - `version` becomes the dependency's `current_value`
//! - nested `{ ... }` groups are skipped
//!
//! Braces are counted anywhere on a line, outside string literals and
//! trailing `#` / `//` comments.

use crate::domain::PackageDependency;
use crate::error::ExtractError;
use regex::Regex;
use std::sync::LazyLock;

// key = "value", matched against a line with its comment removed
static KEY_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?P<key>[^\s=]+)\s*=\s*"(?P<value>[^"]+)"\s*$"#).unwrap()
});

/// Dependencies extracted from one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Line of the closing brace; scanning resumes after it
    pub line_number: usize,
    pub dependencies: Vec<PackageDependency>,
}

/// Extract the dependency declared by the block whose header is at `block_start`
pub fn extract_block(
    block_start: usize,
    lines: &[&str],
    module_name: &str,
) -> Result<ExtractionResult, ExtractError> {
    let mut dep = PackageDependency::new(module_name).with_line(block_start);
    let mut depth = 1usize;

    for (line_number, line) in lines.iter().enumerate().skip(block_start + 1) {
        let code = strip_comment(line);
        if code.trim().is_empty() {
            continue;
        }

        // Attributes of nested groups are not ours
        if depth == 1 {
            if let Some(caps) = KEY_VALUE_RE.captures(code) {
                let key = caps.name("key").map(|m| m.as_str()).unwrap_or("");
                let value = caps.name("value").map(|m| m.as_str()).unwrap_or("");
                match key {
                    "version" => dep.current_value = Some(value.to_string()),
                    "source" => dep.manager_data.source = Some(value.to_string()),
                    _ => {}
                }
            }
        }

        for brace in braces(code) {
            if brace == '{' {
                depth += 1;
                continue;
            }
            depth -= 1;
            if depth == 0 {
                return Ok(ExtractionResult {
                    line_number,
                    dependencies: vec![dep],
                });
            }
        }
    }

    Err(ExtractError::unterminated_block(module_name, block_start))
}

/// The part of `line` before a `#` or `//` comment that is outside a string
pub(crate) fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;
    let mut prev_slash = false;

    for (i, c) in line.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '#' => return &line[..i],
            '/' if prev_slash => return &line[..i - 1],
            _ => {}
        }
        prev_slash = c == '/';
    }

    line
}

/// Braces outside string literals, in order of appearance
fn braces(code: &str) -> impl Iterator<Item = char> + '_ {
    let mut in_string = false;
    let mut escaped = false;

    code.chars().filter(move |&c| {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            return false;
        }
        if c == '"' {
            in_string = true;
        }
        matches!(c, '{' | '}')
    })
}
