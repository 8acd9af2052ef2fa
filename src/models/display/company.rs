//! Company display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Company;

/// Company display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CompanyDisplay {
    /// Company ID
    #[tabled(rename = "ID")]
    pub id: i64,

    /// Company name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Location
    #[tabled(rename = "LOCATION")]
    pub location: String,

    /// Website
    #[tabled(rename = "WEBSITE")]
    pub website: String,
}

impl From<Company> for CompanyDisplay {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            location: company.location.unwrap_or_else(|| "-".to_string()),
            website: company.website.unwrap_or_else(|| "-".to_string()),
        }
    }
}
