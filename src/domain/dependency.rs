//! Dependency record structures

use super::{Datasource, SkipReason};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed dependency type assigned to every classified module
pub const MODULE_DEP_TYPE: &str = "module";

/// Kind of Terraform block a dependency was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    /// Default tag set by the generic block extractor
    #[default]
    Provider,
    /// `module "<name>" { ... }` block
    Module,
}

/// Extractor-specific data carried alongside a dependency
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ManagerData {
    /// Label of the block, e.g. `consul` for `module "consul"`
    pub module_name: String,
    /// Raw `source` attribute as written in the configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Block kind
    pub dependency_kind: DependencyKind,
    /// Zero-based line of the block header
    pub line: usize,
}

/// A dependency extracted from Terraform configuration
///
/// Created by the block extractor with only [`ManagerData`] (and possibly
/// `current_value`) populated, then passed once through the source
/// classifier which fills in the remaining fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackageDependency {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_type: Option<String>,
    /// Canonical, human-facing identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_name: Option<String>,
    /// Key passed to the datasource; may differ from `dep_name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_name: Option<String>,
    /// Pinned ref, tag or version constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<Datasource>,
    /// Explicit registry endpoints derived from a custom hostname
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipReason>,
    pub manager_data: ManagerData,
}

/// Resolution status derived from a dependency's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyStatus {
    /// A datasource can resolve this dependency
    Resolvable(Datasource),
    /// Explicitly excluded from resolution
    Skipped(SkipReason),
    /// Matched none of the recognized source shapes
    Unclassified,
}

impl PackageDependency {
    /// Creates a new dependency for a block label
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            manager_data: ManagerData {
                module_name: module_name.into(),
                ..ManagerData::default()
            },
            ..Self::default()
        }
    }

    /// Sets the raw source (builder pattern)
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.manager_data.source = Some(source.into());
        self
    }

    /// Sets the current value (builder pattern)
    pub fn with_current_value(mut self, value: impl Into<String>) -> Self {
        self.current_value = Some(value.into());
        self
    }

    /// Sets the header line (builder pattern)
    pub fn with_line(mut self, line: usize) -> Self {
        self.manager_data.line = line;
        self
    }

    /// Returns the raw source, if any
    pub fn source(&self) -> Option<&str> {
        self.manager_data.source.as_deref()
    }

    /// Returns the block label
    pub fn module_name(&self) -> &str {
        &self.manager_data.module_name
    }

    /// Returns true if this dependency came from a `module` block
    pub fn is_module(&self) -> bool {
        self.manager_data.dependency_kind == DependencyKind::Module
    }

    /// Returns the name to show to a user: `dep_name`, falling back to the source
    pub fn display_name(&self) -> &str {
        self.dep_name
            .as_deref()
            .or(self.source())
            .unwrap_or_default()
    }

    /// Returns the resolution status of this dependency
    pub fn status(&self) -> DependencyStatus {
        if let Some(reason) = self.skip_reason {
            DependencyStatus::Skipped(reason)
        } else if let Some(datasource) = self.datasource {
            DependencyStatus::Resolvable(datasource)
        } else {
            DependencyStatus::Unclassified
        }
    }
}

impl fmt::Display for PackageDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.module_name(), self.display_name())?;
        if let Some(value) = &self.current_value {
            write!(f, "@{}", value)?;
        }
        match self.status() {
            DependencyStatus::Resolvable(ds) => write!(f, " [{}]", ds),
            DependencyStatus::Skipped(reason) => write!(f, " [skipped: {}]", reason),
            DependencyStatus::Unclassified => write!(f, " [unclassified]"),
        }
    }
}
