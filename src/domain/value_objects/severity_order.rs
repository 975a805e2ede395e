//! Severity Order Value Object
//!
//! The total order that decides which status wins when a directory's
//! children are rolled up into one status.

use serde::{Deserialize, Serialize};

use super::Status;
use crate::error::{LogviewError, LogviewResult};

/// Precedence used when aggregating statuses.
///
/// Index 0 is the most dominant status. The default keeps the historical
/// order in which `Unknown` outranks `Failure`; reorder it in config to
/// let explicit failures win instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeverityOrder {
    ranked: Vec<Status>,
}

impl SeverityOrder {
    /// The historical precedence.
    pub const DEFAULT: [Status; 5] = [
        Status::Unknown,
        Status::Failure,
        Status::Override,
        Status::Retry,
        Status::Success,
    ];

    /// Build an order, rejecting lists that are not a permutation of every status.
    pub fn new(ranked: Vec<Status>) -> LogviewResult<Self> {
        for (i, status) in ranked.iter().enumerate() {
            if ranked[..i].contains(status) {
                return Err(LogviewError::InvalidSeverityOrder {
                    reason: format!("duplicate status '{}'", status),
                });
            }
        }

        if let Some(missing) = Status::ALL.iter().find(|s| !ranked.contains(s)) {
            return Err(LogviewError::InvalidSeverityOrder {
                reason: format!("missing status '{}'", missing),
            });
        }

        Ok(Self { ranked })
    }

    /// Position of `status`; lower is more dominant.
    pub fn rank(&self, status: Status) -> usize {
        self.ranked
            .iter()
            .position(|s| *s == status)
            .unwrap_or(self.ranked.len())
    }

    /// The status that wins over every other.
    pub fn most_dominant_status(&self) -> Status {
        self.ranked[0]
    }

    /// The status every other status beats; what an empty directory gets.
    pub fn least_dominant(&self) -> Status {
        self.ranked[self.ranked.len() - 1]
    }

    /// Most dominant status in `statuses`, or [`Self::least_dominant`] when empty.
    pub fn most_dominant<I>(&self, statuses: I) -> Status
    where
        I: IntoIterator<Item = Status>,
    {
        statuses
            .into_iter()
            .min_by_key(|s| self.rank(*s))
            .unwrap_or_else(|| self.least_dominant())
    }

    /// Statuses from most to least dominant.
    pub fn as_slice(&self) -> &[Status] {
        &self.ranked
    }
}

impl Default for SeverityOrder {
    fn default() -> Self {
        Self {
            ranked: Self::DEFAULT.to_vec(),
        }
    }
}

impl<'de> Deserialize<'de> for SeverityOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ranked = Vec::<Status>::deserialize(deserializer)?;
        SeverityOrder::new(ranked).map_err(serde::de::Error::custom)
    }
}
