//! Module source classification
//!
//! Applies the pattern matchers in a fixed priority order; the first branch
//! that matches wins:
//! 1. Hosted repository shorthand (`github-tags`)
//! 2. Generic VCS URL with ref (`git-tags`)
//! 3. Registry address or relative path (`terraform-registry` / local skip)
//! 4. Missing source (no-source skip)

use crate::domain::{Datasource, PackageDependency, SkipReason, MODULE_DEP_TYPE};
use crate::source::{GenericVcsRef, HostedRepoRef, HostnamePrefix};
use tracing::debug;

const SUBDIRECTORY_SEPARATOR: &str = "//";

/// A module reference a datasource can resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRef {
    pub dep_name: String,
    pub lookup_name: Option<String>,
    pub current_value: Option<String>,
    pub datasource: Datasource,
    pub registry_urls: Option<Vec<String>>,
}

/// Outcome of classifying a module source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Classified(ModuleRef),
    Skipped(SkipReason),
    /// Non-empty source matching no recognized shape
    Unclassified,
}

impl Classification {
    /// Returns the datasource if classified
    pub fn datasource(&self) -> Option<Datasource> {
        match self {
            Classification::Classified(module) => Some(module.datasource),
            _ => None,
        }
    }

    /// Merge this classification into a dependency record
    ///
    /// Only the fields the matching branch defines are written. A registry
    /// module keeps the `current_value` taken from its `version` attribute.
    pub fn apply_to(self, dep: &mut PackageDependency) {
        match self {
            Classification::Classified(module) => {
                dep.dep_type = Some(MODULE_DEP_TYPE.to_string());
                dep.dep_name = Some(module.dep_name);
                dep.datasource = Some(module.datasource);
                if module.lookup_name.is_some() {
                    dep.lookup_name = module.lookup_name;
                }
                if module.current_value.is_some() {
                    dep.current_value = module.current_value;
                }
                if module.registry_urls.is_some() {
                    dep.registry_urls = module.registry_urls;
                }
            }
            Classification::Skipped(reason) => {
                dep.skip_reason = Some(reason);
            }
            Classification::Unclassified => {}
        }
    }
}

/// Classify a raw module source
pub fn classify(source: Option<&str>) -> Classification {
    let source = match source {
        Some(s) if !s.is_empty() => s,
        _ => return Classification::Skipped(SkipReason::NoSource),
    };

    if let Some(hosted) = HostedRepoRef::parse(source) {
        return classify_hosted(hosted);
    }

    if let Some(vcs) = GenericVcsRef::parse(source) {
        return classify_vcs(vcs);
    }

    classify_registry_or_local(source)
}

/// Classify a dependency in place from its `manager_data.source`
pub fn classify_dependency(dep: &mut PackageDependency) {
    let classification = classify(dep.source());
    if classification == Classification::Skipped(SkipReason::NoSource) {
        debug!(module = dep.module_name(), "terraform dep has no source");
    }
    classification.apply_to(dep);
}

fn classify_hosted(hosted: HostedRepoRef<'_>) -> Classification {
    let lookup_name = strip_git_suffix(hosted.project);
    Classification::Classified(ModuleRef {
        dep_name: format!("github.com/{}", lookup_name),
        lookup_name: Some(lookup_name.to_string()),
        current_value: Some(hosted.tag.to_string()),
        datasource: Datasource::GithubTags,
        registry_urls: None,
    })
}

fn classify_vcs(vcs: GenericVcsRef<'_>) -> Classification {
    // The lookup keeps the subdirectory; git-tags needs the full transport URL
    let repo_path = if vcs.has_subdirectory() {
        debug!(path = vcs.path, "terraform module contains subdirectory");
        vcs.path
            .split_once(SUBDIRECTORY_SEPARATOR)
            .map_or(vcs.path, |(repo, _)| repo)
    } else {
        vcs.path
    };

    Classification::Classified(ModuleRef {
        dep_name: strip_git_suffix(repo_path).to_string(),
        lookup_name: Some(vcs.url.to_string()),
        current_value: Some(vcs.tag.to_string()),
        datasource: Datasource::GitTags,
        registry_urls: None,
    })
}

fn classify_registry_or_local(source: &str) -> Classification {
    let address = source
        .split_once(SUBDIRECTORY_SEPARATOR)
        .map_or(source, |(head, _)| head);
    let module_parts: Vec<&str> = address.split('/').collect();

    if module_parts[0] == ".." {
        return Classification::Skipped(SkipReason::Local);
    }

    if module_parts.len() < 3 {
        return Classification::Unclassified;
    }

    let registry_urls = HostnamePrefix::parse(source)
        .map(|prefix| vec![format!("https://{}", prefix.hostname)]);

    Classification::Classified(ModuleRef {
        dep_name: module_parts.join("/"),
        lookup_name: None,
        current_value: None,
        datasource: Datasource::TerraformRegistry,
        registry_urls,
    })
}

fn strip_git_suffix(s: &str) -> &str {
    s.strip_suffix(".git").unwrap_or(s)
}
