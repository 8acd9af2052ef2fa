//! Session persistence in the config file

use std::path::PathBuf;

use log::debug;

use super::Config;
use crate::client::{Session, SessionStore};
use crate::error::Result;

/// Keeps the session tokens in the YAML config file.
///
/// Every save re-reads the file so other settings written since the client
/// started are preserved.
#[derive(Debug, Clone)]
pub struct ConfigSessionStore {
    path: PathBuf,
}

impl ConfigSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for ConfigSessionStore {
    fn load(&self) -> Result<Session> {
        Ok(Config::load_or_default_from(self.path.clone())?.session())
    }

    fn save(&self, session: &Session) -> Result<()> {
        debug!("Saving session to {}", self.path.display());
        let mut config = Config::load_or_default_from(self.path.clone())?;
        config.set_session(session);
        config.save_to(self.path.clone())
    }
}
