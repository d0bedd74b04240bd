//! The `fixture` module serves placeholder messages for demo mode.
//!
//! The records live in `fixtures/messages.json`, which is embedded at build
//! time and can be replaced by another file at runtime. Fixture data is only
//! served when demo mode is selected; it is never a fallback for failed
//! fetches.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::config::Settings;
use crate::fetcher::MessageSource;
use crate::message::Message;
use crate::utils::FetchError;

const BUILTIN_FIXTURE: &str = include_str!("../../fixtures/messages.json");

/// Read-only set of messages loaded once and handed out on every request.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    messages: Vec<Message>,
}

impl FixtureProvider {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// The bundled demo dataset.
    pub fn builtin() -> Result<Self, FetchError> {
        Ok(Self::new(serde_json::from_str(BUILTIN_FIXTURE)?))
    }

    /// Loads a JSON array of messages from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| FetchError::Fixture {
            path: path.to_path_buf(),
            source,
        })?;
        let messages: Vec<Message> = serde_json::from_str(&raw)?;
        info!("Loaded {} fixture messages from {}", messages.len(), path.display());
        Ok(Self::new(messages))
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Provider for `settings.fetcher.fixture_path`, or the bundled dataset.
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        match &settings.fetcher.fixture_path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }
}

/// The fixture provider to serve instead of live endpoints, if demo mode is on.
pub fn demo_provider(settings: &Settings) -> Result<Option<FixtureProvider>, FetchError> {
    if !settings.fetcher.demo {
        return Ok(None);
    }
    info!("Demo mode enabled, serving fixture data");
    FixtureProvider::from_settings(settings).map(Some)
}

#[async_trait]
impl MessageSource for FixtureProvider {
    async fn fetch_messages(&self) -> Result<Vec<Message>, FetchError> {
        Ok(self.messages.clone())
    }
}

#[cfg(test)]
mod tests;
