//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ExtractError: Issues reading or extracting blocks from Terraform files
//! - ConfigError: Issues with CLI configuration
//! - IoError: File system operation failures
//!
//! Source classification itself never fails; unresolvable sources are
//! reported through `SkipReason` instead.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal application error
///
/// Extraction failures are per file and never fatal; the scanner collects
/// them instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to extracting dependencies from Terraform files
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to read a Terraform file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Block opened but never closed
    #[error("block '{module_name}' starting at line {line} is not terminated")]
    UnterminatedBlock { module_name: String, line: usize },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Unknown datasource filter
    #[error(
        "invalid datasource '{value}': expected 'github-tags', 'git-tags', or 'terraform-registry'"
    )]
    InvalidDatasource { value: String },

    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
}

impl ExtractError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new UnterminatedBlock error
    ///
    /// `line` is zero-based; the message reports it one-based.
    pub fn unterminated_block(module_name: impl Into<String>, line: usize) -> Self {
        ExtractError::UnterminatedBlock {
            module_name: module_name.into(),
            line: line + 1,
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidPath error
    pub fn invalid_path(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_read() {
        let err = ExtractError::read_error(
            "/path/to/main.tf",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("main.tf"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_extract_error_unterminated_block() {
        let err = ExtractError::unterminated_block("consul", 4);
        let msg = format!("{}", err);
        assert!(msg.contains("'consul'"));
        assert!(msg.contains("line 5"));
    }

    #[test]
    fn test_config_error_invalid_datasource() {
        let err = ConfigError::InvalidDatasource {
            value: "npm".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("invalid datasource 'npm'"));
        assert!(msg.contains("terraform-registry"));
    }

    #[test]
    fn test_config_error_invalid_path() {
        let err = ConfigError::invalid_path("/etc/passwd", "not a directory");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid path"));
        assert!(msg.contains("not a directory"));
    }

    #[test]
    fn test_io_error_directory_not_found() {
        let err = IoError::directory_not_found("/path/to/missing");
        let msg = format!("{}", err);
        assert!(msg.contains("directory not found"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::InvalidDatasource {
            value: "bad".to_string(),
        };
        let app_err: AppError = config_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("invalid datasource"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_err = IoError::directory_not_found("/missing");
        let app_err: AppError = io_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("directory not found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ExtractError::unterminated_block("vpc", 1);
        let debug = format!("{:?}", err);
        assert!(debug.contains("UnterminatedBlock"));
    }
}
