//! Login, registration and session commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::args::{GlobalOptions, RoleArg};
use crate::cli::{CommandContext, OutputFormat};
use crate::client::{AuthApi, JobTrackerClient};
use crate::client::models::{Credentials, RegisterRequest, User};
use crate::config::Config;
use crate::error::Result;
use crate::models::UserDisplay;
use crate::output::progress::with_spinner;
use crate::output::{Formattable, json};

/// Sign in and store the session tokens.
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::anonymous(opts)?;
    let credentials = prompt_credentials(email, password, false)?;

    let user = sign_in(&*ctx.client, &credentials).await?;
    remember_api_host(&ctx, opts)?;

    println!("{} Logged in as {}", "✓".green(), user.email.bold());
    Ok(())
}

/// Create an account, then sign in with it.
pub async fn register(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
    role: RoleArg,
) -> Result<()> {
    let ctx = CommandContext::anonymous(opts)?;
    let credentials = prompt_credentials(email, password, true)?;

    let request = RegisterRequest {
        email: credentials.email.clone(),
        password: credentials.password.clone(),
        role: role.into(),
    };
    let registration = with_spinner("Creating account...", ctx.client.register(&request)).await?;
    if let Some(message) = registration.message {
        debug!("Register: {}", message);
    }
    let email = registration.email.unwrap_or_else(|| credentials.email.clone());
    println!("{} Account created for {}", "✓".green(), email.bold());

    let user = sign_in(&*ctx.client, &credentials).await?;
    remember_api_host(&ctx, opts)?;

    println!("{} Logged in as {}", "✓".green(), user.email.bold());
    Ok(())
}

/// Forget the stored session.
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::anonymous(opts)?;
    ctx.client.end_session().await?;
    println!("{} Logged out", "✓".green());
    Ok(())
}

/// Show the signed-in user.
pub async fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let user = with_spinner("Loading profile...", ctx.client.me()).await?;
    let display = UserDisplay::from(user);

    match ctx.format {
        OutputFormat::Pretty => {
            println!("{}", display.email.bold());
            println!("  ID:   {}", display.id);
            println!("  Role: {}", display.role);
        }
        OutputFormat::Table => vec![display].print(ctx.format)?,
        OutputFormat::Json => println!("{}", json::format_json(&display)?),
    }

    Ok(())
}

/// Log in and confirm the session by loading the profile.
///
/// A profile lookup failure right after login means the tokens are unusable,
/// so they are discarded.
async fn sign_in(client: &JobTrackerClient, credentials: &Credentials) -> Result<User> {
    with_spinner("Signing in...", client.login(credentials)).await?;

    match client.me().await {
        Ok(user) => Ok(user),
        Err(e) => {
            debug!("Profile lookup after login failed: {}", e);
            client.end_session().await?;
            Err(e)
        }
    }
}

/// Persist a `--api-host` given at login so later commands use it.
fn remember_api_host(ctx: &CommandContext, opts: &GlobalOptions) -> Result<()> {
    let Some(host) = opts.api_host_ref() else {
        return Ok(());
    };

    let mut config = Config::load_or_default_from(ctx.config_path.clone())?;
    if config.api_host.as_deref() != Some(host) {
        config.api_host = Some(host.to_string());
        config.save_to(ctx.config_path.clone())?;
    }
    Ok(())
}

/// Fill in missing credentials interactively.
fn prompt_credentials(
    email: Option<String>,
    password: Option<String>,
    confirm: bool,
) -> Result<Credentials> {
    let theme = ColorfulTheme::default();

    let email = match email {
        Some(email) => email,
        None => Input::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None if confirm => Password::with_theme(&theme)
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };

    Ok(Credentials { email, password })
}
