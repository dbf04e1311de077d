//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of classified module dependencies
//! - Structured file-by-file results with summary counts

use crate::domain::{Datasource, FileScanResult, PackageDependency};
use crate::output::{OutputFormatter, Verbosity};
use crate::scanner::ScanResult;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Summary statistics
    summary: JsonSummary,
    /// Per-file results
    files: Vec<JsonFile<'a>>,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    dependencies: usize,
    resolvable: usize,
    skipped: usize,
    unclassified: usize,
    /// Breakdown by datasource (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    by_datasource: Vec<JsonDatasourceSummary>,
}

#[derive(Serialize)]
struct JsonDatasourceSummary {
    datasource: Datasource,
    count: usize,
}

/// JSON representation of a file result
#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    dependencies: &'a [PackageDependency],
}

impl JsonFormatter {
    fn file_to_json<'a>(&self, file: &'a FileScanResult) -> JsonFile<'a> {
        JsonFile {
            path: file.path.display().to_string(),
            dependencies: &file.dependencies,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &ScanResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let summary = &result.summary;

        let by_datasource = if self.verbosity == Verbosity::Verbose {
            summary
                .by_datasource()
                .into_iter()
                .map(|(datasource, count)| JsonDatasourceSummary { datasource, count })
                .collect()
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            summary: JsonSummary {
                files: summary.files_processed(),
                dependencies: summary.total_dependencies(),
                resolvable: summary.total_resolvable(),
                skipped: summary.total_skips(),
                unclassified: summary.total_unclassified(),
                by_datasource,
            },
            files: summary.files.iter().map(|f| self.file_to_json(f)).collect(),
            errors: result.errors.iter().map(|e| e.to_string()).collect(),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScanSummary, SkipReason};
    use crate::scanner::ScanError;
    use crate::source::classify_dependency;

    fn dependency(name: &str, source: &str) -> PackageDependency {
        let mut dep = PackageDependency::new(name).with_source(source);
        classify_dependency(&mut dep);
        dep
    }

    fn sample_result() -> ScanResult {
        let mut summary = ScanSummary::new();
        summary.add_file(FileScanResult::new(
            "infra/main.tf",
            vec![
                dependency("consul", "github.com/hashicorp/consul?ref=v1.2.0"),
                dependency("vpc", "registry.example.com/team/vpc/aws"),
                dependency("local", "../local/module"),
                dependency("odd", "team/module"),
            ],
        ));
        ScanResult {
            summary,
            errors: Vec::new(),
        }
    }

    fn format(result: &ScanResult, verbosity: Verbosity) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new(verbosity)
            .format(result, &mut output)
            .unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_json_summary() {
        let json = format(&sample_result(), Verbosity::Normal);
        assert_eq!(json["summary"]["files"], 1);
        assert_eq!(json["summary"]["dependencies"], 4);
        assert_eq!(json["summary"]["resolvable"], 2);
        assert_eq!(json["summary"]["skipped"], 1);
        assert_eq!(json["summary"]["unclassified"], 1);
        assert!(json["summary"].get("by_datasource").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_json_dependencies() {
        let json = format(&sample_result(), Verbosity::Normal);
        let file = &json["files"][0];
        assert_eq!(file["path"], "infra/main.tf");

        let consul = &file["dependencies"][0];
        assert_eq!(consul["dep_type"], "module");
        assert_eq!(consul["dep_name"], "github.com/hashicorp/consul");
        assert_eq!(consul["lookup_name"], "hashicorp/consul");
        assert_eq!(consul["current_value"], "v1.2.0");
        assert_eq!(consul["datasource"], "github-tags");

        let vpc = &file["dependencies"][1];
        assert_eq!(vpc["registry_urls"][0], "https://registry.example.com");

        let local = &file["dependencies"][2];
        assert_eq!(
            local["skip_reason"],
            serde_json::to_value(SkipReason::Local).unwrap()
        );
        assert!(local.get("datasource").is_none());
    }

    #[test]
    fn test_json_verbose_breakdown() {
        let json = format(&sample_result(), Verbosity::Verbose);
        let breakdown = json["summary"]["by_datasource"].as_array().unwrap();
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0]["datasource"], "github-tags");
        assert_eq!(breakdown[0]["count"], 1);
        assert_eq!(breakdown[2]["datasource"], "terraform-registry");
        assert_eq!(breakdown[2]["count"], 1);
    }

    #[test]
    fn test_json_errors() {
        let mut result = sample_result();
        result.errors.push(ScanError::ExtractError {
            path: "broken.tf".to_string(),
            message: "not terminated".to_string(),
        });
        let json = format(&result, Verbosity::Normal);
        let errors = json["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].as_str().unwrap().contains("broken.tf"));
    }
}
