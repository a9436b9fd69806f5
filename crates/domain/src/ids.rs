//! Typed identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a scenario record.
///
/// Always positive: the dataset keys scenarios from 1 upward, and zero or
/// negative values mark an absent/invalid id at the API boundary. The
/// invariant is enforced at every construction path, including serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ScenarioId(u32);

impl ScenarioId {
    /// Creates an id from a raw value, rejecting zero.
    pub fn new(raw: u32) -> Result<Self, DomainError> {
        if raw == 0 {
            return Err(DomainError::invalid_id("scenario id must be positive"));
        }
        Ok(Self(raw))
    }

    /// Raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ScenarioId> for u64 {
    fn from(id: ScenarioId) -> Self {
        u64::from(id.0)
    }
}

impl TryFrom<u64> for ScenarioId {
    type Error = DomainError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        let raw = u32::try_from(raw)
            .map_err(|_| DomainError::invalid_id(format!("scenario id {raw} out of range")))?;
        Self::new(raw)
    }
}

impl TryFrom<i64> for ScenarioId {
    type Error = DomainError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw <= 0 {
            return Err(DomainError::invalid_id(format!(
                "scenario id must be positive, got {raw}"
            )));
        }
        let raw = u32::try_from(raw)
            .map_err(|_| DomainError::invalid_id(format!("scenario id {raw} out of range")))?;
        Self::new(raw)
    }
}

impl FromStr for ScenarioId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("invalid scenario id: {s:?}")))?;
        Self::try_from(raw)
    }
}
