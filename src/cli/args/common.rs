//! Common CLI types shared across commands

use crate::client::SortOrder;
use crate::client::models::{JobStatus, Role};

/// Sort direction for list commands
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SortDir {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

impl From<SortDir> for SortOrder {
    fn from(dir: SortDir) -> Self {
        match dir {
            SortDir::Asc => SortOrder::Asc,
            SortDir::Desc => SortOrder::Desc,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

/// Account role for registration
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum RoleArg {
    #[default]
    User,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::User => Role::User,
            RoleArg::Admin => Role::Admin,
        }
    }
}

/// Parse a job status argument (case-insensitive).
pub fn parse_status(s: &str) -> Result<JobStatus, String> {
    s.parse()
}
