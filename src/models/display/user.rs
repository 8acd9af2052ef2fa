//! User display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::User;

/// Current user display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ROLE")]
    pub role: String,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user
                .role
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}
