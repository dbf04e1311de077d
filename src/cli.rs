//! CLI argument parsing module for tfmod

use crate::domain::Datasource;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a datasource identifier such as `github-tags`
fn parse_datasource(s: &str) -> Result<Datasource, String> {
    s.parse::<Datasource>().map_err(|e| e.to_string())
}

/// Terraform module source classifier
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tfmod",
    version,
    about = "Classify Terraform module sources by datasource"
)]
pub struct CliArgs {
    /// Target directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // General options
    /// Enable verbose output and debug logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Only scan the top-level directory
    #[arg(long)]
    pub no_recurse: bool,

    // Filters
    /// Show only modules resolved by this datasource (can be specified multiple times)
    #[arg(long = "datasource", action = ArgAction::Append, value_parser = parse_datasource)]
    pub datasources: Vec<Datasource>,

    /// Hide skipped and unclassified modules
    #[arg(long)]
    pub hide_skipped: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Check if any datasource filter is specified
    pub fn has_datasource_filter(&self) -> bool {
        !self.datasources.is_empty()
    }

    /// Check if a dependency with the given datasource should be reported
    ///
    /// Dependencies without a datasource are reported unless a datasource
    /// filter is active or `--hide-skipped` is set.
    pub fn should_report(&self, datasource: Option<Datasource>) -> bool {
        match datasource {
            Some(ds) => !self.has_datasource_filter() || self.datasources.contains(&ds),
            None => !self.has_datasource_filter() && !self.hide_skipped,
        }
    }

    /// Whether to descend into subdirectories
    pub fn recursive(&self) -> bool {
        !self.no_recurse
    }
}
