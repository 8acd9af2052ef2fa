//! Job application status and its transition table
//!
//! ```text
//! applied   -> {interview, rejected}
//! interview -> {offer, rejected}
//! offer     -> {}
//! rejected  -> {}
//! ```
//!
//! Nothing points back to `applied`: it is only ever assigned by the backend
//! when a job is created. This table decides which moves the CLI offers; the
//! backend enforces the same graph and has the final say.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status of a job application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::INITIAL
    }
}

impl JobStatus {
    /// All statuses, in pipeline order.
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    /// Status assigned to every newly created job.
    pub const INITIAL: JobStatus = JobStatus::Applied;

    /// Statuses reachable in one move from `self`.
    pub fn allowed_transitions(self) -> &'static [JobStatus] {
        match self {
            JobStatus::Applied => &[JobStatus::Interview, JobStatus::Rejected],
            JobStatus::Interview => &[JobStatus::Offer, JobStatus::Rejected],
            JobStatus::Offer | JobStatus::Rejected => &[],
        }
    }

    /// Whether a job may move from `self` to `to`.
    pub fn can_transition_to(self, to: JobStatus) -> bool {
        self.allowed_transitions().contains(&to)
    }

    /// Terminal statuses have no outgoing moves.
    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Wire name used by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interview => "interview",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
        }
    }
}

/// Whether a job may move from `from` to `to`.
pub fn is_transition_allowed(from: JobStatus, to: JobStatus) -> bool {
    from.can_transition_to(to)
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applied" => Ok(JobStatus::Applied),
            "interview" => Ok(JobStatus::Interview),
            "offer" => Ok(JobStatus::Offer),
            "rejected" => Ok(JobStatus::Rejected),
            other => Err(format!(
                "unknown status '{}' (expected one of: applied, interview, offer, rejected)",
                other
            )),
        }
    }
}
