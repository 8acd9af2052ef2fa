//! Job Tracker API data models
//!
//! Domain types exchanged with the backend, organized by resource.

mod auth;
mod company;
pub mod job;
mod status;
mod user;

pub use auth::{Credentials, RefreshedToken, RegisterRequest, Registration, TokenPair};
pub use company::{Company, CreateCompanyRequest};
pub use job::{CreateJobRequest, Job, UpdateStatusRequest};
pub use status::{JobStatus, is_transition_allowed};
pub use user::{Role, User};
