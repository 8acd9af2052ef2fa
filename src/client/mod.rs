//! Job Tracker API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod request;
pub mod session;
pub mod tracker;

pub use api::{AuthApi, CompanyApi, JobApi};
#[cfg(test)]
pub use mock::MockJobTrackerClient;
pub use pagination::{DEFAULT_PAGE_SIZE, JobQuery, SortOrder, fetch_all_jobs};
#[cfg(test)]
pub use session::MemorySessionStore;
pub use session::{Session, SessionStore};
pub use tracker::JobTrackerClient;

/// Complete Job Tracker API surface.
///
/// Implemented automatically for anything that implements all the
/// sub-traits, so commands can take `&dyn JobTrackerApi` or a generic bound.
pub trait JobTrackerApi: AuthApi + CompanyApi + JobApi {}

impl<T: AuthApi + CompanyApi + JobApi> JobTrackerApi for T {}
