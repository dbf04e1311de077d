//! Scan orchestrator for coordinating the classification workflow
//!
//! This module provides:
//! - Workflow coordination: detect → read → extract → classify → filter
//! - Datasource and skip filter application
//! - Error handling with partial continuation

use crate::cli::CliArgs;
use crate::domain::{FileScanResult, ScanSummary};
use crate::error::{ConfigError, IoError};
use crate::manifest::{detect_terraform_files, parse_terraform_file};
use crate::progress::ScanProgress;
use std::path::Path;
use tracing::{debug, warn};

/// Scanner for coordinating the classification workflow
pub struct Scanner {
    /// CLI arguments for configuration
    args: CliArgs,
}

/// Result of running the scanner
pub struct ScanResult {
    /// Summary with all classified dependencies
    pub summary: ScanSummary,
    /// Errors encountered during processing
    pub errors: Vec<ScanError>,
}

/// Non-fatal errors that can occur while scanning
#[derive(Debug)]
pub enum ScanError {
    /// Failed to read or extract a Terraform file
    ExtractError { path: String, message: String },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::ExtractError { path, message } => {
                write!(f, "Failed to extract {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for ScanError {}

impl Scanner {
    /// Create a new scanner, validating the target path
    pub fn new(args: CliArgs) -> Result<Self, crate::error::AppError> {
        validate_target(&args.path)?;
        Ok(Self { args })
    }

    /// Run the scan workflow
    pub fn run(&self) -> ScanResult {
        self.run_with_progress(!self.args.quiet && !self.args.json)
    }

    /// Run the scan workflow with optional progress display
    pub fn run_with_progress(&self, show_progress: bool) -> ScanResult {
        let mut progress = ScanProgress::new(show_progress);
        let mut summary = ScanSummary::new();
        let mut errors = Vec::new();

        // Step 1: Detect Terraform files
        progress.detecting(&self.args.path);
        let files = detect_terraform_files(&self.args.path, self.args.recursive());
        debug!(count = files.len(), path = %self.args.path.display(), "detected terraform files");

        // Step 2: Extract and classify module dependencies
        progress.start_parsing(files.len());
        for path in &files {
            match parse_terraform_file(path) {
                Ok(dependencies) => {
                    progress.file_parsed(path, dependencies.len());
                    let dependencies: Vec<_> = dependencies
                        .into_iter()
                        .filter(|d| self.args.should_report(d.datasource))
                        .collect();
                    if !dependencies.is_empty() {
                        summary.add_file(FileScanResult::new(path, dependencies));
                    }
                }
                Err(e) => {
                    progress.file_failed(path);
                    warn!(path = %path.display(), error = %e, "failed to extract modules");
                    errors.push(ScanError::ExtractError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }
        progress.finish();
        debug!(modules = progress.modules_seen(), "extraction finished");

        ScanResult { summary, errors }
    }
}

/// Check that the scan target is an existing directory
fn validate_target(path: &Path) -> Result<(), crate::error::AppError> {
    if !path.exists() {
        return Err(IoError::directory_not_found(path).into());
    }
    if !path.is_dir() {
        return Err(ConfigError::invalid_path(path, "not a directory").into());
    }
    Ok(())
}
