//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{Credentials, RefreshedToken, RegisterRequest, Registration, TokenPair, User};
use crate::error::Result;

/// Authentication operations for the Job Tracker API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange email and password for a token pair.
    ///
    /// On success the tokens become the client's session.
    async fn login(&self, credentials: &Credentials) -> Result<TokenPair>;

    /// Create a new account. Does not sign in.
    async fn register(&self, request: &RegisterRequest) -> Result<Registration>;

    /// Trade the stored refresh token for a new access token.
    async fn refresh(&self) -> Result<RefreshedToken>;

    /// Fetch the signed-in user.
    async fn me(&self) -> Result<User>;
}
