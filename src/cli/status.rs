//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::format_expiry;
use crate::output::progress::with_spinner;

/// Run the status command to display configuration and session status
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "jobtrack Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!("{} Configuration not found", "✗".red());
        println!(
            "  → Run {} to create {}",
            "jobtrack login".cyan(),
            config_path.display()
        );
    }

    let ctx = CommandContext::anonymous(opts)?;
    println!("API host: {}", ctx.client.base_url().cyan());
    println!();

    let session = ctx.client.session().await;
    match (&session.access_token, session.access_expires_at()) {
        (None, _) => {
            println!("{} Not logged in", "○".dimmed());
            println!("  → Run 'jobtrack login' to sign in");
        }
        (Some(_), Some(exp)) => {
            let expiry = format_expiry(exp, chrono::Utc::now());
            if expiry == "expired" {
                println!(
                    "{} Access token expired (will refresh on next command)",
                    "⚠".yellow()
                );
            } else {
                println!("{} Access token valid ({})", "✓".green(), expiry);
            }
        }
        (Some(_), None) => println!("{} Access token stored", "✓".green()),
    }

    if session.refresh_token.is_some() {
        println!("{} Refresh token stored", "✓".green());
    } else if session.access_token.is_some() {
        println!(
            "{} No refresh token (you will need to log in again when the access token expires)",
            "⚠".yellow()
        );
    }

    match with_spinner("Checking API...", ctx.client.health_check()).await {
        Ok(()) => println!("{} API reachable", "✓".green()),
        Err(e) => println!("{} API unreachable: {}", "✗".red(), e),
    }

    println!();
    Ok(())
}
