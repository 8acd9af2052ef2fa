//! Job application API trait

use async_trait::async_trait;

use crate::client::models::{CreateJobRequest, Job, JobStatus};
use crate::client::pagination::JobQuery;
use crate::error::Result;

/// Job application operations for the Job Tracker API
///
/// The backend embeds each job's company in listings and assigns the initial
/// `applied` status on create.
#[async_trait]
pub trait JobApi: Send + Sync {
    /// List one page of jobs.
    async fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>>;

    /// File a new application against an existing company.
    async fn create_job(&self, request: &CreateJobRequest) -> Result<Job>;

    /// Move a job to `status`. The backend rejects moves outside the
    /// transition table.
    async fn update_job_status(&self, job_id: i64, status: JobStatus) -> Result<Job>;
}
