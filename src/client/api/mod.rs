//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login, registration, token refresh, current user
//! - [`CompanyApi`] - Company listing and creation
//! - [`JobApi`] - Job listing, creation and status moves
//!
//! The [`JobTrackerApi`](super::JobTrackerApi) super-trait combines them.

mod auth;
mod company;
mod job;

pub use auth::AuthApi;
pub use company::CompanyApi;
pub use job::JobApi;
