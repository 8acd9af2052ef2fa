//! Job application models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::JobStatus;

/// Company summary embedded in job listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: i64,
    pub name: String,
}

/// Job application
///
/// The listing endpoint embeds `company` and `applied_date`, create returns
/// `company_id`, and the status update returns neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Job ID
    pub id: i64,

    /// Position title
    pub title: String,

    /// Current status
    #[serde(default)]
    pub status: JobStatus,

    /// Company ID (create response)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,

    /// Embedded company (list response)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyRef>,

    /// When the application was filed, as sent by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<String>,
}

impl Job {
    /// ID of the company this job belongs to, from whichever field is present.
    pub fn company_id(&self) -> Option<i64> {
        self.company_id.or_else(|| self.company.as_ref().map(|c| c.id))
    }

    /// Company name, when the response embedded it.
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|c| c.name.as_str())
    }

    /// Parsed application date.
    ///
    /// Accepts RFC 2822 (`Tue, 14 Jan 2025 10:00:00 GMT`) and RFC 3339.
    pub fn applied_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.applied_date.as_deref()?;
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

/// Payload for `POST /jobs`
#[derive(Debug, Clone, Serialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company_id: i64,
}

/// Payload for `PATCH /jobs/{id}/status`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: JobStatus,
}
