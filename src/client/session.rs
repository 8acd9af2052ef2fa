//! Client session state and persistence
//!
//! The session is an explicit value owned by the API client. Where it is
//! persisted is decided by the caller through a [`SessionStore`]; the CLI
//! keeps it in the config file, tests keep it in memory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::TokenPair;
use crate::error::Result;

/// Access and refresh tokens for the signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl Session {
    /// Session with no credentials.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when neither token is present.
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }

    /// Expiry of the access token, read from its JWT `exp` claim.
    ///
    /// Informational only: the token is not verified, and the server decides
    /// validity. Returns `None` for tokens that are not JWTs.
    pub fn access_expires_at(&self) -> Option<DateTime<Utc>> {
        self.access_token.as_deref().and_then(jwt_expiry)
    }
}

impl From<TokenPair> for Session {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: Some(tokens.access_token),
            refresh_token: Some(tokens.refresh_token),
        }
    }
}

/// Durable storage for the session tokens.
pub trait SessionStore: Send + Sync {
    /// Load the stored session (empty if nothing was stored).
    fn load(&self) -> Result<Session>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove both tokens.
    fn clear(&self) -> Result<()> {
        self.save(&Session::empty())
    }
}

/// Session store that lives only as long as the process.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: std::sync::Mutex<Session>,
}

#[cfg(test)]
impl MemorySessionStore {
    /// Create a store seeded with `session`.
    pub fn new(session: Session) -> Self {
        Self {
            session: std::sync::Mutex::new(session),
        }
    }

    /// Current contents.
    pub fn snapshot(&self) -> Session {
        self.session
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Session> {
        Ok(self.snapshot())
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Ok(mut guard) = self.session.lock() {
            *guard = session.clone();
        }
        Ok(())
    }
}

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> std::result::Result<Vec<u8>, String> {
    use base64::{Engine as _, engine::general_purpose};

    general_purpose::URL_SAFE_NO_PAD
        .decode(input.trim_end_matches('='))
        .map_err(|e| e.to_string())
}

/// Read the `exp` claim of a JWT without verifying it.
fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    #[derive(Deserialize)]
    struct JwtPayload {
        exp: i64,
    }

    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload_bytes = base64_decode_url(parts[1]).ok()?;
    let payload: JwtPayload = serde_json::from_slice(&payload_bytes).ok()?;
    DateTime::from_timestamp(payload.exp, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose};

    fn fake_jwt(exp: i64) -> String {
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"1","exp":{}}}"#, exp));
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", payload)
    }

    #[test]
    fn test_session_from_token_pair() {
        let session = Session::from(TokenPair {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        });
        assert_eq!(session.access_token.as_deref(), Some("a"));
        assert_eq!(session.refresh_token.as_deref(), Some("r"));
        assert!(!session.is_empty());
    }

    #[test]
    fn test_memory_store_roundtrip_and_clear() {
        let store = MemorySessionStore::default();
        assert!(store.load().unwrap().is_empty());

        let session = Session {
            access_token: Some("a".to_string()),
            refresh_token: Some("r".to_string()),
        };
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_access_expiry_from_jwt() {
        let session = Session {
            access_token: Some(fake_jwt(1_736_942_400)),
            refresh_token: None,
        };
        let exp = session.access_expires_at().expect("exp decoded");
        assert_eq!(exp.timestamp(), 1_736_942_400);
    }

    #[test]
    fn test_access_expiry_for_opaque_token() {
        let session = Session {
            access_token: Some("not-a-jwt".to_string()),
            refresh_token: None,
        };
        assert!(session.access_expires_at().is_none());
        assert!(Session::empty().access_expires_at().is_none());
    }
}
