//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-file module listings with datasource labels and colors
//! - Skipped and unclassified module display with reasons
//! - Summary with per-datasource breakdown

use crate::domain::{DependencyStatus, FileScanResult, PackageDependency, ScanSummary};
use crate::output::{OutputFormatter, Verbosity};
use crate::scanner::ScanResult;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_color(verbosity, true)
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Label describing how a dependency will be handled
    fn status_label(&self, dep: &PackageDependency) -> String {
        match dep.status() {
            DependencyStatus::Resolvable(ds) => {
                let label = format!("[{}]", ds);
                if self.color {
                    label.cyan().to_string()
                } else {
                    label
                }
            }
            DependencyStatus::Skipped(reason) => {
                let label = format!("(skipped: {})", reason);
                if self.color {
                    label.dimmed().to_string()
                } else {
                    label
                }
            }
            DependencyStatus::Unclassified => {
                if self.color {
                    "(unclassified)".yellow().to_string()
                } else {
                    "(unclassified)".to_string()
                }
            }
        }
    }

    /// Calculate the maximum module name length for alignment
    fn max_name_length(&self, deps: &[PackageDependency]) -> usize {
        deps.iter()
            .map(|d| d.module_name().len())
            .max()
            .unwrap_or(0)
    }

    /// Format a single dependency line
    fn format_dependency_line(
        &self,
        dep: &PackageDependency,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let value = dep
            .current_value
            .as_deref()
            .map(|v| format!(" {}", v))
            .unwrap_or_default();
        let label = self.status_label(dep);

        if self.color {
            let name_display = format!("{:width$}", dep.module_name(), width = max_name_len);
            writeln!(
                writer,
                "  {} {}{} {}",
                name_display.bold(),
                dep.display_name(),
                value.bright_white(),
                label
            )?;
        } else {
            writeln!(
                writer,
                "  {:width$} {}{} {}",
                dep.module_name(),
                dep.display_name(),
                value,
                label,
                width = max_name_len
            )?;
        }

        if self.verbosity == Verbosity::Verbose {
            let pad = max_name_len + 3;
            if let Some(lookup_name) = &dep.lookup_name {
                writeln!(writer, "{:pad$}lookup: {}", "", lookup_name, pad = pad)?;
            }
            if let Some(urls) = &dep.registry_urls {
                writeln!(writer, "{:pad$}registry: {}", "", urls.join(", "), pad = pad)?;
            }
        }

        Ok(())
    }

    /// Format one file with its dependencies
    fn format_file(&self, file: &FileScanResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let path_display = file.path.display().to_string();
        let count = file.dependencies.len();
        let noun = if count == 1 { "module" } else { "modules" };

        if self.color {
            writeln!(
                writer,
                "{} {}",
                path_display.bold(),
                format!("({} {})", count, noun).dimmed()
            )?;
        } else {
            writeln!(writer, "{} ({} {})", path_display, count, noun)?;
        }

        let max_name_len = self.max_name_length(&file.dependencies);
        for dep in &file.dependencies {
            self.format_dependency_line(dep, max_name_len, writer)?;
        }

        writeln!(writer)?;
        Ok(())
    }

    /// Format the summary line
    fn format_summary(&self, summary: &ScanSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let files = summary.files_processed();
        let total = summary.total_dependencies();

        if total == 0 {
            return writeln!(writer, "No module dependencies found.");
        }

        let line = format!(
            "{} modules in {} {}: {} resolvable, {} skipped, {} unclassified",
            total,
            files,
            if files == 1 { "file" } else { "files" },
            summary.total_resolvable(),
            summary.total_skips(),
            summary.total_unclassified()
        );
        if self.color {
            writeln!(writer, "{}", line.bold())?;
        } else {
            writeln!(writer, "{}", line)?;
        }

        if self.verbosity == Verbosity::Verbose {
            for (datasource, count) in summary.by_datasource() {
                if count > 0 {
                    writeln!(writer, "  {}: {}", datasource.display_name(), count)?;
                }
            }
        }

        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &ScanResult, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            for file in &result.summary.files {
                self.format_file(file, writer)?;
            }
        }

        self.format_summary(&result.summary, writer)?;

        if !result.errors.is_empty() {
            let header = format!("{} file(s) could not be parsed", result.errors.len());
            if self.color {
                writeln!(writer, "{}", header.red())?;
            } else {
                writeln!(writer, "{}", header)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
            "main.tf",
            vec![
                dependency("consul", "github.com/hashicorp/consul?ref=v1.2.0"),
                dependency("sub", "git::https://example.com/team/repo.git//modules/sub?ref=v2"),
                dependency("local", "../local/module"),
                dependency("odd", "team/module"),
            ],
        ));
        ScanResult {
            summary,
            errors: Vec::new(),
        }
    }

    fn format(result: &ScanResult, verbosity: Verbosity) -> String {
        let mut output = Vec::new();
        TextFormatter::with_color(verbosity, false)
            .format(result, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_text_lists_dependencies() {
        let output = format(&sample_result(), Verbosity::Normal);
        assert!(output.contains("main.tf (4 modules)"));
        assert!(output.contains("consul github.com/hashicorp/consul v1.2.0 [github-tags]"));
        assert!(output.contains("example.com/team/repo v2 [git-tags]"));
        assert!(output.contains("../local/module (skipped: local module)"));
        assert!(output.contains("team/module (unclassified)"));
    }

    #[test]
    fn test_text_summary() {
        let output = format(&sample_result(), Verbosity::Normal);
        assert!(output.contains("4 modules in 1 file: 2 resolvable, 1 skipped, 1 unclassified"));
    }

    #[test]
    fn test_text_verbose_shows_lookup() {
        let output = format(&sample_result(), Verbosity::Verbose);
        assert!(output.contains("lookup: https://example.com/team/repo.git//modules/sub"));
        assert!(output.contains("GitHub tags: 1"));
        assert!(!output.contains("Terraform Registry:"));
    }

    #[test]
    fn test_text_quiet_only_summary() {
        let output = format(&sample_result(), Verbosity::Quiet);
        assert!(!output.contains("main.tf"));
        assert!(output.contains("4 modules in 1 file"));
    }

    #[test]
    fn test_text_empty() {
        let result = ScanResult {
            summary: ScanSummary::new(),
            errors: Vec::new(),
        };
        let output = format(&result, Verbosity::Normal);
        assert_eq!(output, "No module dependencies found.\n");
    }

    #[test]
    fn test_text_errors() {
        let mut result = sample_result();
        result.errors.push(ScanError::ExtractError {
            path: "broken.tf".to_string(),
            message: "not terminated".to_string(),
        });
        let output = format(&result, Verbosity::Normal);
        assert!(output.contains("1 file(s) could not be parsed"));
    }
}
