//! Datasource definitions for module version resolution

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Backend responsible for resolving versions or tags of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Datasource {
    /// Tags of a GitHub repository
    GithubTags,
    /// Tags of an arbitrary git remote
    GitTags,
    /// Versions published to a Terraform module registry
    TerraformRegistry,
}

impl Datasource {
    /// Returns the datasource identifier
    pub fn id(&self) -> &'static str {
        match self {
            Datasource::GithubTags => "github-tags",
            Datasource::GitTags => "git-tags",
            Datasource::TerraformRegistry => "terraform-registry",
        }
    }

    /// Returns the display name for this datasource
    pub fn display_name(&self) -> &'static str {
        match self {
            Datasource::GithubTags => "GitHub tags",
            Datasource::GitTags => "Git tags",
            Datasource::TerraformRegistry => "Terraform Registry",
        }
    }

    /// Returns all datasources
    pub fn all() -> &'static [Datasource] {
        &[
            Datasource::GithubTags,
            Datasource::GitTags,
            Datasource::TerraformRegistry,
        ]
    }
}

impl fmt::Display for Datasource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Datasource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Datasource::all()
            .iter()
            .find(|ds| ds.id() == s.trim())
            .copied()
            .ok_or_else(|| ConfigError::InvalidDatasource {
                value: s.to_string(),
            })
    }
}
