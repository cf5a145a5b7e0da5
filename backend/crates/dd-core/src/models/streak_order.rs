use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Order in which an identity's meals are scanned for the on-diet streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StreakOrder {
    /// By `occurred_at`, ties broken by creation time then insertion order
    #[default]
    Chronological,
    /// Whatever order the store returns for an unordered owner query
    Store,
}

impl StreakOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chronological => "chronological",
            Self::Store => "store",
        }
    }
}

impl FromStr for StreakOrder {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "chronological" => Ok(Self::Chronological),
            "store" => Ok(Self::Store),
            _ => Err(CoreError::InvalidStreakOrder {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for StreakOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
