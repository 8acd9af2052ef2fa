//! Job display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Job;
use crate::output::formatters::format_date;

/// Job display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct JobDisplay {
    /// Job ID
    #[tabled(rename = "ID")]
    pub id: i64,

    /// Position title
    #[tabled(rename = "TITLE")]
    pub title: String,

    /// Company name (or ID when the response did not embed it)
    #[tabled(rename = "COMPANY")]
    pub company: String,

    /// Current status
    #[tabled(rename = "STATUS")]
    pub status: String,

    /// Application date
    #[tabled(rename = "APPLIED")]
    pub applied: String,
}

impl From<Job> for JobDisplay {
    fn from(job: Job) -> Self {
        let company = match (job.company_name(), job.company_id()) {
            (Some(name), _) => name.to_string(),
            (None, Some(id)) => format!("#{}", id),
            (None, None) => "-".to_string(),
        };

        Self {
            id: job.id,
            applied: format_date(job.applied_at()),
            title: job.title,
            company,
            status: job.status.to_string(),
        }
    }
}
