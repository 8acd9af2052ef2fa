//! Job Tracker API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, RwLock};

use super::api::{AuthApi, CompanyApi, JobApi};
use super::models::{
    Company, CreateCompanyRequest, CreateJobRequest, Credentials, Job, JobStatus, RefreshedToken,
    RegisterRequest, Registration, TokenPair, UpdateStatusRequest, User,
};
use super::pagination::JobQuery;
use super::request::ApiRequest;
use super::session::{Session, SessionStore};
use crate::error::{ApiError, Error, Result};

/// Default API base URL (local backend)
pub const DEFAULT_API_HOST: &str = "http://localhost:5000";

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Job Tracker API client
///
/// Attaches the session's access token to every request. A 401 on an
/// ordinary request triggers one refresh-and-retry cycle; if the refresh is
/// rejected the session is cleared and the caller gets
/// [`ApiError::SessionExpired`].
pub struct JobTrackerClient {
    http: HttpClient,
    base_url: String,
    session: RwLock<Session>,
    store: Arc<dyn SessionStore>,
    /// Serializes refreshes so concurrent 401s share one refresh
    refresh_lock: Mutex<()>,
}

impl JobTrackerClient {
    /// Create a client against `api_host` (or the default host), seeded
    /// with whatever session `store` holds.
    pub fn new(api_host: Option<String>, store: Arc<dyn SessionStore>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = api_host
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
            .trim_end_matches('/')
            .to_string();
        let session = store.load()?;

        Ok(Self {
            http,
            base_url,
            session: RwLock::new(session),
            store,
            refresh_lock: Mutex::new(()),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current session
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Replace the session in memory and in the store.
    pub async fn set_session(&self, session: Session) -> Result<()> {
        self.store.save(&session)?;
        *self.session.write().await = session;
        Ok(())
    }

    /// Forget both tokens in memory and in the store.
    pub async fn end_session(&self) -> Result<()> {
        *self.session.write().await = Session::empty();
        self.store.clear()
    }

    /// Check that the backend answers `GET /health`.
    pub async fn health_check(&self) -> Result<()> {
        let response = self.send(&ApiRequest::get("/health"), None).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await.into())
        }
    }

    /// Issue `request`, refreshing the access token once on a 401.
    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let mut request = request;

        loop {
            let access_token = self.session.read().await.access_token.clone();
            let response = self.send(&request, access_token.as_deref()).await?;

            if response.status() == StatusCode::UNAUTHORIZED && request.may_refresh() {
                let rejection = error_from_response(response).await;
                self.recover_session(access_token.as_deref(), rejection).await?;
                request = request.retry();
                continue;
            }

            return parse_response(response).await;
        }
    }

    /// Obtain a new access token after `stale_token` was rejected.
    ///
    /// Returns once a usable token is stored. Fails with the original
    /// rejection when there is no refresh token, and with
    /// `SessionExpired` (after clearing the session) when the refresh
    /// itself fails.
    async fn recover_session(&self, stale_token: Option<&str>, rejection: ApiError) -> Result<()> {
        let _guard = self.refresh_lock.lock().await;
        let session = self.session.read().await.clone();

        if session.access_token.is_some() && session.access_token.as_deref() != stale_token {
            debug!("Access token already refreshed by a concurrent request");
            return Ok(());
        }

        if session.refresh_token.is_none() {
            debug!("No refresh token stored; not retrying");
            return Err(rejection.into());
        }

        match self.refresh().await {
            Ok(_) => {
                debug!("Access token refreshed");
                Ok(())
            }
            Err(Error::Api(err)) => {
                warn!("Token refresh failed, ending session: {}", err);
                self.discard_session().await;
                Err(ApiError::SessionExpired(Box::new(err)).into())
            }
            Err(err) => Err(err),
        }
    }

    /// Drop the session after a rejected refresh.
    ///
    /// Memory is cleared first so the rejected tokens are never sent again,
    /// even when the store cannot be written.
    async fn discard_session(&self) {
        *self.session.write().await = Session::empty();
        if let Err(err) = self.store.clear() {
            warn!("Could not clear stored session: {}", err);
        }
    }

    /// `POST /auth/refresh` with the refresh token as bearer credential.
    async fn request_refresh(
        &self,
        refresh_token: &str,
    ) -> std::result::Result<RefreshedToken, ApiError> {
        let response = self
            .send(&ApiRequest::post("/auth/refresh"), Some(refresh_token))
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response
            .json::<RefreshedToken>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse refresh response: {}", e)))
    }

    async fn store_access_token(&self, access_token: String) -> Result<()> {
        let mut session = self.session.read().await.clone();
        session.access_token = Some(access_token);
        self.set_session(session).await
    }

    /// Send one HTTP request with an optional bearer token.
    async fn send(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> std::result::Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path());
        debug!(
            "{} {} (attempt {})",
            request.method(),
            request.path(),
            request.attempt() + 1
        );

        let mut builder = self.http.request(request.method().clone(), &url);
        if !request.query_params().is_empty() {
            builder = builder.query(request.query_params());
        }
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        debug!("{} {} -> {}", request.method(), request.path(), response.status());
        Ok(response)
    }
}

/// Decode a successful response or map a failed one to an [`ApiError`].
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await.into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

    serde_json::from_str(&body).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response: {}. Body was: {}", e, body))
            .into()
    })
}

/// Map a non-success response to an [`ApiError`], keeping the server message.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = server_message(&body);

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(
            message.unwrap_or_else(|| "Invalid or expired credentials".to_string()),
        ),
        StatusCode::FORBIDDEN => ApiError::Forbidden(
            message.unwrap_or_else(|| "You don't have permission to access this resource".to_string()),
        ),
        StatusCode::NOT_FOUND => {
            ApiError::NotFound(message.unwrap_or_else(|| "Resource not found".to_string()))
        }
        s if s.is_server_error() => ApiError::ServerError(s.as_u16()),
        s if s.is_client_error() => ApiError::Validation(
            message.unwrap_or_else(|| format!("Request rejected (HTTP {})", s.as_u16())),
        ),
        s => ApiError::InvalidResponse(format!("Unexpected status code: {}", s)),
    }
}

/// Extract a human-readable message from an error body.
///
/// Understands `{"error": "..."}`, field-keyed validation errors
/// (`{"error": {"title": ["..."]}}`) and `{"msg": "..."}` from the token
/// layer. Falls back to the raw body when it is short plain text.
fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        return (trimmed.len() <= 200 && !trimmed.starts_with('<')).then(|| trimmed.to_string());
    };

    ["error", "message", "msg"]
        .iter()
        .find_map(|key| value.get(key))
        .map(flatten_message)
}

fn flatten_message(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(flatten_message)
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Object(fields) => fields
            .iter()
            .map(|(field, msgs)| format!("{}: {}", field, flatten_message(msgs)))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

#[async_trait]
impl AuthApi for JobTrackerClient {
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair> {
        let request = ApiRequest::post("/auth/login").json(credentials)?;
        let tokens: TokenPair = self.execute(request).await?;
        self.set_session(Session::from(tokens.clone())).await?;
        Ok(tokens)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Registration> {
        self.execute(ApiRequest::post("/auth/register").json(request)?)
            .await
    }

    async fn refresh(&self) -> Result<RefreshedToken> {
        let refresh_token = self
            .session
            .read()
            .await
            .refresh_token
            .clone()
            .ok_or_else(|| ApiError::Unauthorized("No refresh token stored".to_string()))?;

        let token = self.request_refresh(&refresh_token).await?;
        self.store_access_token(token.access_token.clone()).await?;
        Ok(token)
    }

    async fn me(&self) -> Result<User> {
        self.execute(ApiRequest::get("/auth/me")).await
    }
}

#[async_trait]
impl CompanyApi for JobTrackerClient {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.execute(ApiRequest::get("/companies")).await
    }

    async fn create_company(&self, request: &CreateCompanyRequest) -> Result<Company> {
        self.execute(ApiRequest::post("/companies").json(request)?)
            .await
    }
}

#[async_trait]
impl JobApi for JobTrackerClient {
    async fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>> {
        self.execute(ApiRequest::get("/jobs").query(query.to_query_params()))
            .await
    }

    async fn create_job(&self, request: &CreateJobRequest) -> Result<Job> {
        self.execute(ApiRequest::post("/jobs").json(request)?).await
    }

    async fn update_job_status(&self, job_id: i64, status: JobStatus) -> Result<Job> {
        let path = format!("/jobs/{}/status", job_id);
        self.execute(ApiRequest::patch(path).json(&UpdateStatusRequest { status })?)
            .await
    }
}
