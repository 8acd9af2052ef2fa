//! Job application commands

use colored::Colorize;
use log::debug;

use crate::cli::args::{GlobalOptions, JobFilterArgs, PaginationArgs};
use crate::cli::company::resolve_company;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::{CreateJobRequest, Job, JobStatus, is_transition_allowed};
use crate::client::pagination::BULK_PAGE_SIZE;
use crate::client::{JobApi, JobQuery, fetch_all_jobs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::JobDisplay;
use crate::output::json;
use crate::output::progress::with_spinner;

/// List jobs, one page at a time
pub async fn list(
    opts: &GlobalOptions,
    filters: &JobFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    let filters = filters.clone();
    let pagination = pagination.clone();

    run_list_command::<Job, JobDisplay, _, _>(opts, "jobs", |client, page_size| async move {
        let query = pagination.to_job_query(&filters, page_size);
        client.list_jobs(&query).await
    })
    .await
}

/// Create a job under a company given by ID or name
pub async fn create(opts: &GlobalOptions, title: String, company: String) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let company = resolve_company(&*ctx.client, &company).await?;
    let request = CreateJobRequest {
        title,
        company_id: company.id,
    };
    let job = with_spinner("Creating job...", ctx.client.create_job(&request)).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&JobDisplay::from(job))?),
        _ => println!(
            "{} Created job {} at {} {} [{}]",
            "✓".green(),
            job.title.bold(),
            company.name,
            format!("(#{})", job.id).dimmed(),
            job.status
        ),
    }

    Ok(())
}

/// Move a job to a new status
pub async fn move_to(opts: &GlobalOptions, job_id: i64, status: JobStatus) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let (from, job) = with_spinner("Updating job...", move_job(&*ctx.client, job_id, status)).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&job)?),
        _ => println!(
            "{} Job #{} moved: {} → {}",
            "✓".green(),
            job.id,
            from,
            job.status.to_string().bold()
        ),
    }

    Ok(())
}

/// Print the statuses a job may move to from `status`
pub fn transitions(opts: &GlobalOptions, status: JobStatus) -> Result<()> {
    let config = Config::load_or_default_from(Config::resolve_path(opts.config_ref())?)?;
    let next = status.allowed_transitions();

    match opts.resolve_format(&config) {
        OutputFormat::Json => println!("{}", json::format_json(next)?),
        OutputFormat::Table => {
            for s in next {
                println!("{}", s);
            }
        }
        OutputFormat::Pretty => {
            if status.is_terminal() {
                println!("'{}' is a final status.", status);
            } else {
                let names: Vec<&str> = next.iter().map(|s| s.as_str()).collect();
                println!("{} → {}", status, names.join(", "));
            }
        }
    }

    Ok(())
}

/// Look up a job's current status, check the move locally, then send it.
///
/// Returns the status the job moved from along with the server's response.
/// Moves the transition table forbids are rejected without a request.
pub async fn move_job<C: JobApi + ?Sized>(
    client: &C,
    job_id: i64,
    to: JobStatus,
) -> Result<(JobStatus, Job)> {
    let jobs = fetch_all_jobs(client, JobQuery::new().limit(BULK_PAGE_SIZE)).await?;
    let from = jobs
        .iter()
        .find(|j| j.id == job_id)
        .map(|j| j.status)
        .ok_or(Error::JobNotFound(job_id))?;

    if !is_transition_allowed(from, to) {
        return Err(Error::InvalidTransition { from, to });
    }

    debug!("Moving job {} from {} to {}", job_id, from, to);
    let job = client.update_job_status(job_id, to).await?;
    Ok((from, job))
}
