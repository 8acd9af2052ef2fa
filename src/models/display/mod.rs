//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod company;
mod dashboard;
mod job;
mod user;

pub use company::CompanyDisplay;
pub use dashboard::DashboardSummary;
pub use job::JobDisplay;
pub use user::UserDisplay;
