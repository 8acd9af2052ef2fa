//! Company API trait

use async_trait::async_trait;

use crate::client::models::{Company, CreateCompanyRequest};
use crate::error::Result;

/// Company operations for the Job Tracker API
#[async_trait]
pub trait CompanyApi: Send + Sync {
    /// List the signed-in user's companies.
    async fn list_companies(&self) -> Result<Vec<Company>>;

    /// Create a company.
    async fn create_company(&self, request: &CreateCompanyRequest) -> Result<Company>;
}
