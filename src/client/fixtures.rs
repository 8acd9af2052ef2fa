//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

use super::models::job::CompanyRef;
use super::models::{Company, Job, JobStatus};

// ============================================================================
// CompanyBuilder
// ============================================================================

/// Builder for creating test Company instances.
///
/// # Example
/// ```ignore
/// let company = CompanyBuilder::new(1)
///     .name("Acme")
///     .location("Berlin")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct CompanyBuilder {
    id: i64,
    name: String,
    location: Option<String>,
    website: Option<String>,
}

impl CompanyBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Company {}", id),
            location: None,
            website: None,
        }
    }

    /// Set the company name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the website.
    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Build the Company instance.
    pub fn build(self) -> Company {
        Company {
            id: self.id,
            name: self.name,
            location: self.location,
            website: self.website,
        }
    }
}

// ============================================================================
// JobBuilder
// ============================================================================

/// Builder for creating test Job instances shaped like list responses.
///
/// # Example
/// ```ignore
/// let job = JobBuilder::new(7)
///     .title("Backend Engineer")
///     .company(1, "Acme")
///     .status(JobStatus::Interview)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct JobBuilder {
    id: i64,
    title: String,
    status: JobStatus,
    company: CompanyRef,
    applied_date: Option<String>,
}

impl JobBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Position {}", id),
            status: JobStatus::Applied,
            company: CompanyRef {
                id: 1,
                name: "Company 1".to_string(),
            },
            applied_date: Some("Mon, 06 Jan 2025 09:00:00 GMT".to_string()),
        }
    }

    /// Set the position title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the status.
    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the embedded company.
    pub fn company(mut self, id: i64, name: impl Into<String>) -> Self {
        self.company = CompanyRef {
            id,
            name: name.into(),
        };
        self
    }

    /// Set the raw applied date.
    pub fn applied_date(mut self, date: impl Into<String>) -> Self {
        self.applied_date = Some(date.into());
        self
    }

    /// Build the Job instance.
    pub fn build(self) -> Job {
        Job {
            id: self.id,
            title: self.title,
            status: self.status,
            company_id: None,
            company: Some(self.company),
            applied_date: self.applied_date,
        }
    }
}
