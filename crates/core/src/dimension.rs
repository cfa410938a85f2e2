//! Dimension identifiers.
//!
//! Ore descriptors target dimensions by name, so the canonical lowercase
//! name of each dimension doubles as its configuration key.

use serde::{Deserialize, Serialize};

/// Stable identifier for a world dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionId {
    /// The Overworld dimension.
    Overworld,
    /// The Nether dimension.
    Nether,
    /// The End dimension.
    End,
}

impl DimensionId {
    /// Every dimension the host knows about, in declaration order.
    pub const ALL: [Self; 3] = [Self::Overworld, Self::Nether, Self::End];

    /// Canonical lowercase name used in configs and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overworld => "overworld",
            Self::Nether => "nether",
            Self::End => "end",
        }
    }

    /// Look up a dimension by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dim| name.eq_ignore_ascii_case(dim.as_str()))
    }
}

impl Default for DimensionId {
    fn default() -> Self {
        Self::Overworld
    }
}
