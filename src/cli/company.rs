//! Company commands

use colored::Colorize;
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::CompanyApi;
use crate::client::models::{Company, CreateCompanyRequest};
use crate::error::{Error, Result};
use crate::models::CompanyDisplay;
use crate::output::json;
use crate::output::progress::with_spinner;

/// List companies
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Company, CompanyDisplay, _, _>(opts, "companies", |client, _| async move {
        client.list_companies().await
    })
    .await
}

/// Create a company
pub async fn create(
    opts: &GlobalOptions,
    name: String,
    location: Option<String>,
    website: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = CreateCompanyRequest {
        location,
        website,
        ..CreateCompanyRequest::new(name)
    };
    let company = with_spinner("Creating company...", ctx.client.create_company(&request)).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&CompanyDisplay::from(company))?),
        _ => println!(
            "{} Created company {} {}",
            "✓".green(),
            company.name.bold(),
            format!("(#{})", company.id).dimmed()
        ),
    }

    Ok(())
}

/// Find a company by ID or by name (case-insensitive).
///
/// A numeric argument that matches no company ID is also tried as a name.
pub async fn resolve_company<C: CompanyApi + ?Sized>(client: &C, key: &str) -> Result<Company> {
    let key = key.trim();
    let companies = client.list_companies().await?;
    debug!("Resolving company '{}' among {}", key, companies.len());

    let by_id = key
        .parse::<i64>()
        .ok()
        .and_then(|id| companies.iter().find(|c| c.id == id));
    let found = by_id.or_else(|| {
        companies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(key))
    });

    found
        .cloned()
        .ok_or_else(|| Error::CompanyNotFound(key.to_string()))
}
