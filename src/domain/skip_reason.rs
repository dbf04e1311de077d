//! Skip reasons for dependencies that cannot be resolved

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason why a dependency is excluded from version resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Source is a relative filesystem path
    Local,
    /// Module block has no source attribute
    NoSource,
}

impl SkipReason {
    /// Returns the machine-readable identifier
    pub fn id(&self) -> &'static str {
        match self {
            SkipReason::Local => "local",
            SkipReason::NoSource => "no-source",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Local => write!(f, "local module"),
            SkipReason::NoSource => write!(f, "no source"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(format!("{}", SkipReason::Local), "local module");
        assert_eq!(format!("{}", SkipReason::NoSource), "no source");
    }

    #[test]
    fn test_skip_reason_id() {
        assert_eq!(SkipReason::Local.id(), "local");
        assert_eq!(SkipReason::NoSource.id(), "no-source");
    }

    #[test]
    fn test_serde_skip_reason() {
        let json = serde_json::to_string(&SkipReason::NoSource).unwrap();
        assert_eq!(json, "\"no-source\"");

        let parsed: SkipReason = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(parsed, SkipReason::Local);
    }
}
