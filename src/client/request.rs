//! Outbound request description
//!
//! A request is described once and can be issued more than once. The number
//! of authentication retries already spent travels with the value instead of
//! being flagged on a shared object.

use reqwest::Method;
use serde::Serialize;

use crate::error::{ApiError, Result};

/// Paths that must never trigger a token refresh: a 401 there means the
/// credentials themselves were rejected.
const AUTH_ENTRY_PATHS: [&str; 2] = ["/auth/login", "/auth/register"];

/// Maximum number of refresh-and-retry cycles per original request
pub const MAX_AUTH_RETRIES: u8 = 1;

/// A single API call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
    attempt: u8,
}

impl ApiRequest {
    /// Create a request for `method` on `path` (relative to the API base URL).
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            attempt: 0,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Attach query string parameters.
    pub fn query(mut self, params: Vec<(&'static str, String)>) -> Self {
        self.query = params;
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to encode request: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// The same request, counted as one more authentication retry.
    pub fn retry(&self) -> Self {
        Self {
            attempt: self.attempt.saturating_add(1),
            ..self.clone()
        }
    }

    /// Whether a 401 on this request may be answered with a refresh.
    pub fn may_refresh(&self) -> bool {
        self.attempt < MAX_AUTH_RETRIES && !self.is_auth_entry()
    }

    /// True for the login and registration endpoints.
    pub fn is_auth_entry(&self) -> bool {
        AUTH_ENTRY_PATHS.iter().any(|p| self.path.starts_with(p))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn attempt(&self) -> u8 {
        self.attempt
    }
}
