//! API profile selection.

use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// Which API surface a [`SpecModel`](super::SpecModel) reports.
///
/// Under [`Profile::Core`] everything removed by any feature is excluded
/// from feature views; [`Profile::Compatibility`] keeps it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    Core,
    #[default]
    Compatibility,
}

impl Profile {
    /// Registry spelling of the profile.
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Core => "core",
            // Historical spelling, kept for compatibility with existing callers.
            Profile::Compatibility => "compatability",
        }
    }
}

impl FromStr for Profile {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(Profile::Core),
            "compatability" => Ok(Profile::Compatibility),
            other => Err(RegistryError::InvalidProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
