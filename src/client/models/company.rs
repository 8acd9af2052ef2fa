//! Company models

use serde::{Deserialize, Serialize};

/// Company a job application is filed against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Company ID
    pub id: i64,

    /// Company name
    pub name: String,

    /// Location (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Website URL (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Payload for `POST /companies`
#[derive(Debug, Clone, Serialize)]
pub struct CreateCompanyRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl CreateCompanyRequest {
    /// Create a request for a company with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            website: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_omits_empty_fields() {
        let body = serde_json::to_value(CreateCompanyRequest::new("Acme")).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Acme" }));
    }

    #[test]
    fn test_company_accepts_null_optionals() {
        let c: Company =
            serde_json::from_str(r#"{"id": 1, "name": "Acme", "location": null, "website": null}"#)
                .unwrap();
        assert_eq!(c.name, "Acme");
        assert!(c.location.is_none());
    }
}
