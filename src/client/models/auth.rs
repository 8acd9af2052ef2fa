//! Authentication models

use serde::{Deserialize, Serialize};

use super::user::Role;

/// Login credentials for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up payload for `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Token pair issued by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived credential attached to API calls
    pub access_token: String,

    /// Longer-lived credential used only to obtain a new access token
    pub refresh_token: String,
}

/// Response from `POST /auth/refresh`
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshedToken {
    pub access_token: String,
}

/// Response from `POST /auth/register`
///
/// The backend answers with a confirmation message; newer versions may echo
/// the created user instead, so every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
