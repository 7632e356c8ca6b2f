//! Page-level configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page may embed a JSON object in
//! `<script id="app-config" type="application/json">`. Every key is optional;
//! anything missing falls back to [`AppConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// DOM id of the embedded configuration element.
#[cfg(feature = "csr")]
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed app config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Name shown in the shell's greeting.
    pub greeting_name: String,
    /// Unit dispatches per counter button click.
    pub batch_step: u32,
    /// `log` level name for the browser console.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            greeting_name: "Leptos".to_owned(),
            batch_step: 3,
            log_level: "debug".to_owned(),
        }
    }
}

impl AppConfig {
    /// Parse and check a JSON config object.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed JSON or mistyped keys,
    /// [`ConfigError::LogLevel`] for a level `log` does not know.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.level()?;
        Ok(config)
    }

    /// The configured level as a `log` level.
    ///
    /// # Errors
    ///
    /// [`ConfigError::LogLevel`] when the name does not parse.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

/// Text of the embedded config element, if the page has one.
pub fn read_embedded() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Resolve the page config, falling back to defaults.
///
/// Returns the rejected config's error alongside so the caller can report it
/// once logging is up.
pub fn load() -> (AppConfig, Option<ConfigError>) {
    match read_embedded().map(|raw| AppConfig::from_json(&raw)) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (AppConfig::default(), Some(err)),
        None => (AppConfig::default(), None),
    }
}
