//! Mock Job Tracker API client for testing
//!
//! Behaves like a small in-memory backend: it filters, sorts and pages jobs,
//! requires companies to exist before jobs reference them, and enforces the
//! status transition table the way the real server does.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, CompanyApi, JobApi};
use super::models::job::CompanyRef;
use super::models::{
    Company, CreateCompanyRequest, CreateJobRequest, Credentials, Job, JobStatus, RefreshedToken,
    RegisterRequest, Registration, TokenPair, User,
};
use super::pagination::{JobQuery, SortOrder};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure starting data via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockJobTrackerClient::new()
///     .with_companies(vec![CompanyBuilder::new(1).name("Acme").build()])
///     .await;
///
/// let companies = mock.list_companies().await?;
/// assert_eq!(companies.len(), 1);
/// ```
#[derive(Default)]
pub struct MockJobTrackerClient {
    /// Companies known to the backend
    companies: Arc<Mutex<Vec<Company>>>,
    /// Jobs known to the backend
    jobs: Arc<Mutex<Vec<Job>>>,
    /// User returned from `me`
    user: Arc<Mutex<Option<User>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured job queries for test assertions
    captured_queries: Arc<Mutex<Vec<JobQuery>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub refresh: usize,
    pub me: usize,
    pub list_companies: usize,
    pub create_company: usize,
    pub list_jobs: usize,
    pub create_job: usize,
    pub update_job_status: usize,
}

impl MockJobTrackerClient {
    /// Create a new mock client with no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed companies.
    pub async fn with_companies(self, companies: Vec<Company>) -> Self {
        *self.companies.lock().await = companies;
        self
    }

    /// Seed jobs.
    pub async fn with_jobs(self, jobs: Vec<Job>) -> Self {
        *self.jobs.lock().await = jobs;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all job queries received, in order.
    pub async fn captured_queries(&self) -> Vec<JobQuery> {
        self.captured_queries.lock().await.clone()
    }

    /// Current state of a job.
    pub async fn job(&self, id: i64) -> Option<Job> {
        self.jobs.lock().await.iter().find(|j| j.id == id).cloned()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockJobTrackerClient {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair> {
        self.check_error().await?;
        self.call_count.lock().await.login += 1;

        *self.user.lock().await = Some(User {
            id: "1".to_string(),
            email: credentials.email.clone(),
            role: None,
        });

        Ok(TokenPair {
            access_token: "mock-access-token".to_string(),
            refresh_token: "mock-refresh-token".to_string(),
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Registration> {
        self.check_error().await?;
        self.call_count.lock().await.register += 1;

        Ok(Registration {
            message: Some("user registered succesfully".to_string()),
            email: Some(request.email.clone()),
        })
    }

    async fn refresh(&self) -> Result<RefreshedToken> {
        self.check_error().await?;
        self.call_count.lock().await.refresh += 1;

        Ok(RefreshedToken {
            access_token: "mock-access-token-2".to_string(),
        })
    }

    async fn me(&self) -> Result<User> {
        self.check_error().await?;
        self.call_count.lock().await.me += 1;

        self.user
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization Header".to_string()).into())
    }
}

// ============================================================================
// CompanyApi Implementation
// ============================================================================

#[async_trait]
impl CompanyApi for MockJobTrackerClient {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.check_error().await?;
        self.call_count.lock().await.list_companies += 1;

        Ok(self.companies.lock().await.clone())
    }

    async fn create_company(&self, request: &CreateCompanyRequest) -> Result<Company> {
        self.check_error().await?;
        self.call_count.lock().await.create_company += 1;

        if request.name.trim().is_empty() {
            return Err(ApiError::Validation("Company name is required".to_string()).into());
        }

        let mut companies = self.companies.lock().await;
        let company = Company {
            id: companies.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            name: request.name.clone(),
            location: request.location.clone(),
            website: request.website.clone(),
        };
        companies.push(company.clone());
        Ok(company)
    }
}

// ============================================================================
// JobApi Implementation
// ============================================================================

#[async_trait]
impl JobApi for MockJobTrackerClient {
    async fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>> {
        self.captured_queries.lock().await.push(query.clone());
        self.check_error().await?;
        self.call_count.lock().await.list_jobs += 1;

        let mut jobs: Vec<Job> = self
            .jobs
            .lock()
            .await
            .iter()
            .filter(|j| query.status.is_none_or(|s| j.status == s))
            .cloned()
            .collect();

        jobs.sort_by_key(|j| j.applied_at());
        if query.sort == SortOrder::Desc {
            jobs.reverse();
        }

        Ok(jobs
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .collect())
    }

    async fn create_job(&self, request: &CreateJobRequest) -> Result<Job> {
        self.check_error().await?;
        self.call_count.lock().await.create_job += 1;

        if request.title.trim().is_empty() {
            return Err(ApiError::Validation("Job title required".to_string()).into());
        }

        let company = self
            .companies
            .lock()
            .await
            .iter()
            .find(|c| c.id == request.company_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Company not found".to_string()))?;

        let mut jobs = self.jobs.lock().await;
        let job = Job {
            id: jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1,
            title: request.title.clone(),
            status: JobStatus::INITIAL,
            company_id: Some(company.id),
            company: Some(CompanyRef {
                id: company.id,
                name: company.name,
            }),
            applied_date: Some(chrono::Utc::now().to_rfc2822()),
        };
        jobs.push(job.clone());

        Ok(Job {
            company: None,
            applied_date: None,
            ..job
        })
    }

    async fn update_job_status(&self, job_id: i64, status: JobStatus) -> Result<Job> {
        self.check_error().await?;
        self.call_count.lock().await.update_job_status += 1;

        let mut jobs = self.jobs.lock().await;
        let job = jobs
            .iter_mut()
            .find(|j| j.id == job_id)
            .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

        if !job.status.can_transition_to(status) {
            return Err(ApiError::Validation("Invalid status transition".to_string()).into());
        }
        job.status = status;

        Ok(Job {
            company_id: None,
            company: None,
            applied_date: None,
            ..job.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{CompanyBuilder, JobBuilder};

    #[tokio::test]
    async fn test_mock_create_job_requires_company() {
        let mock = MockJobTrackerClient::new();
        let err = mock
            .create_job(&CreateJobRequest {
                title: "SRE".to_string(),
                company_id: 42,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Company not found"));
    }

    #[tokio::test]
    async fn test_mock_job_lifecycle() {
        let mock = MockJobTrackerClient::new()
            .with_companies(vec![CompanyBuilder::new(1).name("Acme").build()])
            .await;

        let job = mock
            .create_job(&CreateJobRequest {
                title: "Backend Engineer".to_string(),
                company_id: 1,
            })
            .await
            .unwrap();
        assert_eq!(job.status, JobStatus::Applied);

        let moved = mock
            .update_job_status(job.id, JobStatus::Interview)
            .await
            .unwrap();
        assert_eq!(moved.status, JobStatus::Interview);

        let err = mock
            .update_job_status(job.id, JobStatus::Applied)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid status transition");
    }

    #[tokio::test]
    async fn test_mock_sorts_by_applied_date() {
        let mock = MockJobTrackerClient::new()
            .with_jobs(vec![
                JobBuilder::new(1).applied_date("Mon, 06 Jan 2025 09:00:00 GMT").build(),
                JobBuilder::new(2).applied_date("Wed, 08 Jan 2025 09:00:00 GMT").build(),
                JobBuilder::new(3).applied_date("Tue, 07 Jan 2025 09:00:00 GMT").build(),
            ])
            .await;

        let newest: Vec<i64> = mock
            .list_jobs(&JobQuery::new())
            .await
            .unwrap()
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(newest, vec![2, 3, 1]);

        let oldest: Vec<i64> = mock
            .list_jobs(&JobQuery::new().sort(SortOrder::Asc).limit(2))
            .await
            .unwrap()
            .iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(oldest, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockJobTrackerClient::new()
            .with_error(ApiError::ServerError(500))
            .await;

        assert!(mock.list_companies().await.is_err());
        assert!(mock.list_companies().await.is_ok());
    }
}
