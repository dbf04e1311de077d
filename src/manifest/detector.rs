//! Terraform file detection
//!
//! Features:
//! - Detects `*.tf` files in a directory
//! - Optional recursion into subdirectories
//! - Skips hidden directories such as `.terraform` and `.git`

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// File extension of Terraform configuration files
pub const TERRAFORM_EXTENSION: &str = "tf";

/// Detect all Terraform files under the given directory, sorted by path
///
/// Symlinked directories are not followed. A missing or unreadable
/// directory yields an empty list.
pub fn detect_terraform_files(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden_dir(e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| is_regular_file(e) && is_terraform_file(e.path()))
        .map(DirEntry::into_path)
        .collect();

    files.sort();
    files
}

/// Check if a path names a Terraform configuration file
pub fn is_terraform_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == TERRAFORM_EXTENSION)
        .unwrap_or(false)
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|n| n.starts_with('.'))
            .unwrap_or(false)
}

// Symlinks count only when they point at a file
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
