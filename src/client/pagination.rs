//! Query and pagination helpers for job listings
//!
//! The jobs endpoint pages with `limit`/`offset` and sorts by applied date.

use std::collections::HashSet;

use log::{debug, warn};

use super::api::JobApi;
use super::models::{Job, JobStatus};
use crate::error::Result;

/// Page size used by the job table.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Page size used when walking every job (dashboard, status lookups).
pub const BULK_PAGE_SIZE: usize = 100;

/// Sort order by applied date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filter, sort and page parameters for `GET /jobs`.
///
/// # Example
/// ```ignore
/// let query = JobQuery::new()
///     .status(JobStatus::Interview)
///     .sort(SortOrder::Asc)
///     .page(2, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    /// Only jobs in this status
    pub status: Option<JobStatus>,
    /// Sort order by applied date
    pub sort: SortOrder,
    /// Maximum number of jobs to return
    pub limit: usize,
    /// Number of jobs to skip
    pub offset: usize,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            status: None,
            sort: SortOrder::default(),
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl JobQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by status.
    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the sort order.
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the number of jobs to skip.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Select a 0-indexed page of `size` jobs.
    pub fn page(self, page: usize, size: usize) -> Self {
        self.limit(size).offset(page.saturating_mul(size))
    }

    /// The query for the page after this one.
    pub fn next_page(&self) -> Self {
        self.clone().offset(self.offset + self.limit)
    }

    /// Convert to query string parameters.
    ///
    /// `status` is omitted when unset; the others are always sent.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        params.push(("sort", self.sort.as_str().to_string()));
        params.push(("limit", self.limit.to_string()));
        params.push(("offset", self.offset.to_string()));

        params
    }
}

/// Fetch every job matching `query`'s filter, one page at a time.
///
/// Paging stops at the first page shorter than the page size, since the API
/// does not report a total count. A full page made only of jobs already seen
/// also ends the walk, so a backend that ignores `offset` cannot loop forever.
pub async fn fetch_all_jobs<C: JobApi + ?Sized>(client: &C, query: JobQuery) -> Result<Vec<Job>> {
    let mut query = if query.limit == 0 {
        query.limit(BULK_PAGE_SIZE)
    } else {
        query
    };
    let mut all_jobs = Vec::new();
    let mut seen = HashSet::new();

    loop {
        debug!("Fetching jobs (limit={}, offset={})", query.limit, query.offset);
        let page = client.list_jobs(&query).await?;
        let page_len = page.len();
        let before = all_jobs.len();
        all_jobs.extend(page.into_iter().filter(|job| seen.insert(job.id)));

        if page_len < query.limit {
            break;
        }
        if all_jobs.len() == before {
            warn!("Job listing repeated a page at offset {}; stopping", query.offset);
            break;
        }
        query = query.next_page();
    }

    debug!("Total jobs fetched: {}", all_jobs.len());
    Ok(all_jobs)
}
