//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, session validation, and client initialization.

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::JobTrackerClient;
use crate::config::{Config, ConfigSessionStore};
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when the file does not exist yet)
    pub config: Config,
    /// Resolved config file path
    pub config_path: PathBuf,
    /// API client whose session is persisted to the config file
    pub client: Arc<JobTrackerClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a context for a command that needs a signed-in user.
    ///
    /// # Errors
    /// Returns `ConfigError::NotLoggedIn` if no tokens are stored.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let ctx = Self::anonymous(opts)?;
        ctx.config.validate_auth()?;
        Ok(ctx)
    }

    /// Create a context without requiring stored tokens (login, register, logout).
    pub fn anonymous(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_or_default_from(config_path.clone())?;

        let api_host = opts.resolve_api_host(&config);
        debug!(
            "Using config {} (api host: {})",
            config_path.display(),
            api_host.as_deref().unwrap_or("default")
        );

        let store = Arc::new(ConfigSessionStore::new(config_path.clone()));
        let client = Arc::new(JobTrackerClient::new(api_host, store)?);
        let format = opts.resolve_format(&config);

        Ok(Self {
            config,
            config_path,
            client,
            format,
        })
    }

    /// Rows per page for job listings.
    pub fn page_size(&self) -> usize {
        self.config.preferences.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};
    use tempfile::tempdir;

    fn opts_for(path: &std::path::Path) -> GlobalOptions {
        GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_requires_login() {
        let temp = tempdir().unwrap();
        let opts = opts_for(&temp.path().join("config.yaml"));

        match CommandContext::new(&opts) {
            Err(Error::Config(ConfigError::NotLoggedIn)) => (),
            other => panic!("expected NotLoggedIn, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_context_uses_config_values() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(
            &path,
            "api_host: http://api.test/\naccess_token: a\nrefresh_token: r\npreferences:\n  format: json\n  page_size: 3\n",
        )
        .unwrap();

        let ctx = CommandContext::new(&opts_for(&path)).unwrap();

        assert_eq!(ctx.client.base_url(), "http://api.test");
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(ctx.page_size(), 3);
    }
}
