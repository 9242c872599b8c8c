//! Device filter for statistics endpoints.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidParameterError;

/// Device dimension restricting statistics to desktop or mobile traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// No device restriction.
    #[default]
    All,
    /// Desktop traffic only.
    Desktop,
    /// Mobile traffic only.
    Mobile,
}

impl Device {
    /// Returns the filter as the API's `de` query value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Device {
    type Err = InvalidParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(InvalidParameterError::Device {
                given: other.to_string(),
            }),
        }
    }
}
