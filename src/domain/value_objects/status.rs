//! Status Value Object
//!
//! The outcome label attached to every log file and, by aggregation,
//! every directory in the log tree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome label of a log file or directory.
///
/// Which status wins during aggregation is decided by
/// [`SeverityOrder`](super::SeverityOrder), not by declaration order here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Nothing matched, or the file could not be read
    Unknown,
    /// The run reported an error
    Failure,
    /// A step was manually overridden
    Override,
    /// A step had to be retried
    Retry,
    /// The run completed cleanly
    Success,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 5] = [
        Status::Unknown,
        Status::Failure,
        Status::Override,
        Status::Retry,
        Status::Success,
    ];

    /// Lowercase name used in config files and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Unknown => "unknown",
            Status::Failure => "failure",
            Status::Override => "override",
            Status::Retry => "retry",
            Status::Success => "success",
        }
    }

    /// CSS color of the sidebar marker.
    pub fn color(self) -> &'static str {
        match self {
            Status::Unknown => "#9E9E9E",
            Status::Failure => "#ff0000",
            Status::Override => "#FF8C00",
            Status::Retry => "#FFD700",
            Status::Success => "#0BDA51",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unknown" => Ok(Status::Unknown),
            "failure" => Ok(Status::Failure),
            "override" => Ok(Status::Override),
            "retry" => Ok(Status::Retry),
            "success" => Ok(Status::Success),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}
