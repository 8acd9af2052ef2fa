//! Dashboard command implementation

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::pagination::BULK_PAGE_SIZE;
use crate::client::{JobQuery, JobTrackerApi};
use crate::error::Result;
use crate::models::DashboardSummary;
use crate::output::progress::with_spinner;
use crate::output::{Formattable, json};

/// Show totals, per-status counts and the most recent applications.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let summary = with_spinner("Loading dashboard...", load_summary(&*ctx.client)).await?;

    match ctx.format {
        OutputFormat::Pretty => print_pretty(&summary),
        OutputFormat::Table => {
            summary.by_status.clone().print(ctx.format)?;
            println!();
            summary.recent.clone().print(ctx.format)?;
        }
        OutputFormat::Json => println!("{}", json::format_json(&summary)?),
    }

    Ok(())
}

/// Fetch jobs and companies concurrently and summarize them.
///
/// Nothing is summarized unless both requests succeed.
pub async fn load_summary<C>(client: &C) -> Result<DashboardSummary>
where
    C: JobTrackerApi + ?Sized,
{
    let query = JobQuery::new().limit(BULK_PAGE_SIZE);
    let (jobs, companies) =
        futures::try_join!(client.list_jobs(&query), client.list_companies())?;

    debug!(
        "Dashboard loaded {} jobs and {} companies",
        jobs.len(),
        companies.len()
    );
    Ok(DashboardSummary::build(jobs, companies.len()))
}

fn print_pretty(summary: &DashboardSummary) {
    println!("{}\n", "Dashboard".bold());
    println!(
        "  {} applications across {} companies\n",
        summary.total_jobs.to_string().bold(),
        summary.total_companies.to_string().bold()
    );

    for row in &summary.by_status {
        println!("  {:<10} {}", row.status, row.count);
    }

    println!("\n{}", "Recent applications".bold());
    if summary.recent.is_empty() {
        println!("  No applications yet. Add one with 'jobtrack job create'.");
        return;
    }
    for job in &summary.recent {
        println!(
            "  {} {} at {} ({}, {})",
            format!("#{}", job.id).dimmed(),
            job.title,
            job.company,
            job.status,
            job.applied
        );
    }
}
