//! Upgrade policies.

use crate::version::Version;

use std::fmt;
use std::str::FromStr;

/// Tier of the version difference which justifies an upgrade.
///
/// The comparisons are per component: a patch-only bump satisfies `Minor`,
/// and `Major` accepts an upward difference in any component even when an
/// earlier one went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Upgrade when any component of the online version is greater.
    #[default]
    Major,
    /// Upgrade within the same major version.
    Minor,
    /// Upgrade within the same major and minor version.
    Patch,
}

impl Policy {
    /// Tells if `local` should be replaced by `remote` according to this
    /// policy.
    pub fn should_upgrade(self, local: &Version, remote: &Version) -> bool {
        match self {
            Policy::Patch => {
                local.major == remote.major
                    && local.minor == remote.minor
                    && local.patch < remote.patch
            }
            Policy::Minor => {
                local.major == remote.major
                    && (local.minor < remote.minor || local.patch < remote.patch)
            }
            Policy::Major => {
                local.major < remote.major
                    || local.minor < remote.minor
                    || local.patch < remote.patch
            }
        }
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(Policy::Major),
            "minor" => Ok(Policy::Minor),
            "patch" => Ok(Policy::Patch),
            _ => Err(format!(
                "upgrade type should be 'major', 'minor', or 'patch', got '{}'",
                s
            )),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Policy::Major => write!(f, "major"),
            Policy::Minor => write!(f, "minor"),
            Policy::Patch => write!(f, "patch"),
        }
    }
}
