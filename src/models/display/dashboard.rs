//! Dashboard summary model

use serde::Serialize;
use tabled::Tabled;

use super::JobDisplay;
use crate::client::models::{Job, JobStatus};

/// Number of recent applications shown on the dashboard.
pub const RECENT_JOBS: usize = 5;

/// One row of the per-status breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct StatusCountDisplay {
    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "COUNT")]
    pub count: usize,
}

/// Totals, per-status counts and the most recent applications.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_jobs: usize,
    pub total_companies: usize,
    pub by_status: Vec<StatusCountDisplay>,
    pub recent: Vec<JobDisplay>,
}

impl DashboardSummary {
    /// Summarize `jobs` and the number of companies.
    ///
    /// Every status appears in `by_status`, including those with no jobs.
    pub fn build(jobs: Vec<Job>, total_companies: usize) -> Self {
        let by_status = JobStatus::ALL
            .iter()
            .map(|status| StatusCountDisplay {
                status: status.to_string(),
                count: jobs.iter().filter(|j| j.status == *status).count(),
            })
            .collect();

        let total_jobs = jobs.len();
        let mut recent = jobs;
        recent.sort_by_key(|j| std::cmp::Reverse(j.applied_at()));
        recent.truncate(RECENT_JOBS);

        Self {
            total_jobs,
            total_companies,
            by_status,
            recent: recent.into_iter().map(JobDisplay::from).collect(),
        }
    }

    /// Count for a single status.
    #[cfg(test)]
    pub fn count(&self, status: JobStatus) -> usize {
        self.by_status
            .iter()
            .find(|row| row.status == status.as_str())
            .map(|row| row.count)
            .unwrap_or(0)
    }
}
