//! Canonical place names and the implicit home-base sentinel.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Rendered name of the implicit home base.
pub const HOME_BASE_NAME: &str = "state college*";

/// A place as stored and compared after synonym resolution.
///
/// `HomeBase` is never produced by a gazetteer lookup. It stands in for the
/// sender's implied location when a message only names a destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Place {
    Canonical(String),
    HomeBase,
}

impl Place {
    #[must_use]
    pub fn canonical(name: impl Into<String>) -> Self {
        Self::Canonical(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Canonical(name) => name,
            Self::HomeBase => HOME_BASE_NAME,
        }
    }

    #[must_use]
    pub const fn is_home_base(&self) -> bool {
        matches!(self, Self::HomeBase)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Place {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Place {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == HOME_BASE_NAME {
            Ok(Self::HomeBase)
        } else {
            Ok(Self::Canonical(name))
        }
    }
}
