//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Create command context
//! 2. Fetch data
//! 3. Convert to display type
//! 4. Print output

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::JobTrackerClient;
use crate::error::Result;
use crate::output::Formattable;
use crate::output::progress::with_spinner;

/// Run a standard list command with the common fetch → display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Company`, `Job`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
/// * `Fut` - The future type returned by the fetcher
///
/// # Arguments
///
/// * `opts` - Global CLI options (format, config path, API host)
/// * `resource_name` - Name for logging and the loading message (e.g., "jobs")
/// * `fetcher` - Async function given the client and the configured page size
///
/// # Example
///
/// ```ignore
/// run_list_command::<Company, CompanyDisplay, _, _>(opts, "companies", |client, _| async move {
///     client.list_companies().await
/// })
/// .await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<JobTrackerClient>, usize) -> Fut,
{
    let ctx = CommandContext::new(opts)?;

    debug!("Fetching {}", resource_name);
    let message = format!("Loading {}...", resource_name);
    let items = with_spinner(&message, fetcher(ctx.client.clone(), ctx.page_size())).await?;
    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)?;

    Ok(())
}
