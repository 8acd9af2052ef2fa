//! Filter argument types for CLI commands

use clap::Args;

use super::{SortDir, parse_status};
use crate::client::models::JobStatus;

/// Filter arguments for `job list`.
#[derive(Args, Debug, Default, Clone)]
pub struct JobFilterArgs {
    /// Only jobs in this status (applied, interview, offer, rejected)
    #[arg(long, short = 's', value_parser = parse_status)]
    pub status: Option<JobStatus>,

    /// Sort by applied date (asc, desc)
    #[arg(long, value_enum, hide_possible_values = true)]
    pub sort: Option<SortDir>,
}
