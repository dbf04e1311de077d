//! Scan result summary types
//!
//! Provides structures for tracking classified dependencies at file and overall levels.

use super::{Datasource, DependencyStatus, PackageDependency};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classified module dependencies of a single `.tf` file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileScanResult {
    /// Path to the Terraform file
    pub path: PathBuf,
    /// Module dependencies in declaration order
    pub dependencies: Vec<PackageDependency>,
}

impl FileScanResult {
    /// Creates a new FileScanResult
    pub fn new(path: impl Into<PathBuf>, dependencies: Vec<PackageDependency>) -> Self {
        Self {
            path: path.into(),
            dependencies,
        }
    }

    /// Returns the number of dependencies a datasource can resolve
    pub fn resolvable_count(&self) -> usize {
        self.count(|s| matches!(s, DependencyStatus::Resolvable(_)))
    }

    /// Returns the number of skipped dependencies
    pub fn skip_count(&self) -> usize {
        self.count(|s| matches!(s, DependencyStatus::Skipped(_)))
    }

    /// Returns the number of unclassified dependencies
    pub fn unclassified_count(&self) -> usize {
        self.count(|s| s == DependencyStatus::Unclassified)
    }

    /// Returns the number of dependencies using the given datasource
    pub fn datasource_count(&self, datasource: Datasource) -> usize {
        self.count(|s| s == DependencyStatus::Resolvable(datasource))
    }

    /// Returns true if the file declares no modules
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    fn count(&self, pred: impl Fn(DependencyStatus) -> bool) -> usize {
        self.dependencies
            .iter()
            .filter(|d| pred(d.status()))
            .count()
    }
}

/// Overall summary of a scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Results for each file processed
    pub files: Vec<FileScanResult>,
}

impl ScanSummary {
    /// Creates a new, empty ScanSummary
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file result
    pub fn add_file(&mut self, file: FileScanResult) {
        self.files.push(file);
    }

    /// Returns the total number of files processed
    pub fn files_processed(&self) -> usize {
        self.files.len()
    }

    /// Returns the total number of module dependencies
    pub fn total_dependencies(&self) -> usize {
        self.files.iter().map(|f| f.dependencies.len()).sum()
    }

    /// Returns the total number of resolvable dependencies
    pub fn total_resolvable(&self) -> usize {
        self.files.iter().map(|f| f.resolvable_count()).sum()
    }

    /// Returns the total number of skipped dependencies
    pub fn total_skips(&self) -> usize {
        self.files.iter().map(|f| f.skip_count()).sum()
    }

    /// Returns the total number of unclassified dependencies
    pub fn total_unclassified(&self) -> usize {
        self.files.iter().map(|f| f.unclassified_count()).sum()
    }

    /// Returns the number of dependencies per datasource, in [`Datasource::all`] order
    pub fn by_datasource(&self) -> Vec<(Datasource, usize)> {
        Datasource::all()
            .iter()
            .map(|ds| (*ds, self.files.iter().map(|f| f.datasource_count(*ds)).sum()))
            .collect()
    }

    /// Returns all dependencies across all files
    pub fn all_dependencies(&self) -> impl Iterator<Item = &PackageDependency> {
        self.files.iter().flat_map(|f| f.dependencies.iter())
    }
}
