//! Pagination argument types for CLI commands

use clap::Args;

use super::JobFilterArgs;
use crate::client::JobQuery;

/// Shared pagination arguments for list commands.
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Rows per page
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Page number (0-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<usize>,
}

impl PaginationArgs {
    /// Build the job query for these arguments.
    ///
    /// `default_size` applies when `--limit` is not given.
    pub fn to_job_query(&self, filters: &JobFilterArgs, default_size: usize) -> JobQuery {
        let size = self.limit.unwrap_or(default_size).max(1);
        let mut query = JobQuery::new().page(self.page.unwrap_or(0), size);

        if let Some(status) = filters.status {
            query = query.status(status);
        }
        if let Some(dir) = filters.sort {
            query = query.sort(dir.into());
        }

        query
    }
}
