//! Module source pattern matchers
//!
//! Three independent recognizers, each returning typed captures or `None`:
//! - Hosted repository shorthand: `github.com/owner/repo?ref=v1.0.0`
//! - Generic VCS URL with ref: `git::https://host/path/repo.git?ref=v1.0.0`
//! - Hostname prefix: `registry.example.com/...`
//!
//! Matchers are pure and may be evaluated in any order. The classifier decides
//! which one wins.

use regex::Regex;
use std::sync::LazyLock;

// github.com/owner/repo...?ref=tag, also git@github.com:owner/repo
static HOSTED_REPO_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)github\.com([/:])(?P<project>[^/]+/[a-z0-9\-_.]+).*\?ref=(?P<tag>.*)$")
        .unwrap()
});

// [git::]scheme://[user@]path?ref=tag
static GENERIC_VCS_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:git::)?(?P<url>(?:http|https|ssh)://(?:.*@)?(?P<path>.*.*/(?P<project>.*/.*)))\?ref=(?P<tag>.*)$",
    )
    .unwrap()
});

static HOSTNAME_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<hostname>(?:[\w|\d]+\.)+[\w|\d]+)").unwrap());

/// Owner/repository reference on GitHub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostedRepoRef<'a> {
    /// `owner/repo`, possibly ending in `.git`
    pub project: &'a str,
    /// Value of the `ref` query parameter
    pub tag: &'a str,
}

impl<'a> HostedRepoRef<'a> {
    /// Match a hosted repository shorthand anywhere in `source`
    pub fn parse(source: &'a str) -> Option<Self> {
        let caps = HOSTED_REPO_REF_RE.captures(source)?;
        Some(Self {
            project: caps.name("project")?.as_str(),
            tag: caps.name("tag")?.as_str(),
        })
    }
}

/// Generic version-control URL pinned with a `ref` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericVcsRef<'a> {
    /// Transport URL without the `git::` prefix and the ref query
    pub url: &'a str,
    /// Host and path portion of `url`
    pub path: &'a str,
    /// Last two path segments
    pub project: &'a str,
    /// Value of the `ref` query parameter
    pub tag: &'a str,
}

impl<'a> GenericVcsRef<'a> {
    /// Match a `http`, `https` or `ssh` URL with a `?ref=` suffix
    pub fn parse(source: &'a str) -> Option<Self> {
        let caps = GENERIC_VCS_REF_RE.captures(source)?;
        Some(Self {
            url: caps.name("url")?.as_str(),
            path: caps.name("path")?.as_str(),
            project: caps.name("project")?.as_str(),
            tag: caps.name("tag")?.as_str(),
        })
    }

    /// Returns true if `path` selects a subdirectory with `//`
    pub fn has_subdirectory(&self) -> bool {
        self.path.contains("//")
    }
}

/// DNS hostname at the start of a source string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostnamePrefix<'a> {
    pub hostname: &'a str,
}

impl<'a> HostnamePrefix<'a> {
    pub fn parse(source: &'a str) -> Option<Self> {
        let caps = HOSTNAME_PREFIX_RE.captures(source)?;
        Some(Self {
            hostname: caps.name("hostname")?.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosted_repo_ref_https_style() {
        let m = HostedRepoRef::parse("github.com/hashicorp/example?ref=v1.0.0").unwrap();
        assert_eq!(m.project, "hashicorp/example");
        assert_eq!(m.tag, "v1.0.0");
    }

    #[test]
    fn test_hosted_repo_ref_ssh_style() {
        let m = HostedRepoRef::parse("git@github.com:hashicorp/example.git?ref=v2.1.0").unwrap();
        assert_eq!(m.project, "hashicorp/example.git");
        assert_eq!(m.tag, "v2.1.0");
    }

    #[test]
    fn test_hosted_repo_ref_with_prefix_and_subdir() {
        let m = HostedRepoRef::parse(
            "git::https://github.com/hashicorp/example.git//modules/vpc?ref=v1.2.3",
        )
        .unwrap();
        assert_eq!(m.project, "hashicorp/example.git");
        assert_eq!(m.tag, "v1.2.3");
    }

    #[test]
    fn test_hosted_repo_ref_case_insensitive() {
        let m = HostedRepoRef::parse("GitHub.com/Owner/Repo?ref=main").unwrap();
        assert_eq!(m.project, "Owner/Repo");
        assert_eq!(m.tag, "main");
    }

    #[test]
    fn test_hosted_repo_ref_requires_ref() {
        assert!(HostedRepoRef::parse("github.com/hashicorp/example").is_none());
        assert!(HostedRepoRef::parse("gitlab.com/hashicorp/example?ref=v1").is_none());
    }

    #[test]
    fn test_generic_vcs_ref_plain() {
        let m = GenericVcsRef::parse("git::https://example.com/team/repo.git?ref=v1.0.0").unwrap();
        assert_eq!(m.url, "https://example.com/team/repo.git");
        assert_eq!(m.path, "example.com/team/repo.git");
        assert_eq!(m.project, "team/repo.git");
        assert_eq!(m.tag, "v1.0.0");
        assert!(!m.has_subdirectory());
    }

    #[test]
    fn test_generic_vcs_ref_with_user() {
        let m = GenericVcsRef::parse("git::ssh://git@example.com/team/repo.git?ref=v3").unwrap();
        assert_eq!(m.url, "ssh://git@example.com/team/repo.git");
        assert_eq!(m.path, "example.com/team/repo.git");
        assert_eq!(m.tag, "v3");
    }

    #[test]
    fn test_generic_vcs_ref_subdirectory() {
        let m = GenericVcsRef::parse("git::https://example.com/team/repo.git//modules/sub?ref=v2")
            .unwrap();
        assert_eq!(m.url, "https://example.com/team/repo.git//modules/sub");
        assert_eq!(m.path, "example.com/team/repo.git//modules/sub");
        assert_eq!(m.project, "modules/sub");
        assert!(m.has_subdirectory());
    }

    #[test]
    fn test_generic_vcs_ref_without_git_prefix() {
        let m = GenericVcsRef::parse("http://example.com/team/repo?ref=1.0").unwrap();
        assert_eq!(m.url, "http://example.com/team/repo");
        assert_eq!(m.tag, "1.0");
    }

    #[test]
    fn test_generic_vcs_ref_rejects_other_schemes() {
        assert!(GenericVcsRef::parse("ftp://example.com/team/repo?ref=1.0").is_none());
        assert!(GenericVcsRef::parse("https://example.com/team/repo").is_none());
    }

    #[test]
    fn test_hostname_prefix() {
        let m = HostnamePrefix::parse("registry.example.com/team/module/aws").unwrap();
        assert_eq!(m.hostname, "registry.example.com");

        let m = HostnamePrefix::parse("app.terraform.io/org/vpc/aws").unwrap();
        assert_eq!(m.hostname, "app.terraform.io");
    }

    #[test]
    fn test_hostname_prefix_requires_dot() {
        assert!(HostnamePrefix::parse("hashicorp/consul/aws").is_none());
        assert!(HostnamePrefix::parse("./modules/vpc").is_none());
        assert!(HostnamePrefix::parse("").is_none());
    }

    #[test]
    fn test_matchers_do_not_mutate_input() {
        let source = String::from("github.com/hashicorp/consul?ref=v1.2.0");
        let _ = HostedRepoRef::parse(&source);
        let _ = GenericVcsRef::parse(&source);
        let _ = HostnamePrefix::parse(&source);
        assert_eq!(source, "github.com/hashicorp/consul?ref=v1.2.0");
    }
}
