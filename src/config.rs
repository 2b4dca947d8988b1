//! Navigator configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_MAX_REDIRECTS: usize = 4;

const MAX_REDIRECTS_VAR: &str = "CHAT_MAX_REDIRECTS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Guard redirects allowed within a single navigation.
    pub max_redirects: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self { max_redirects: DEFAULT_MAX_REDIRECTS }
    }
}

impl NavigatorConfig {
    /// Build config from any variable lookup.
    ///
    /// Optional:
    /// - `CHAT_MAX_REDIRECTS`: default 4
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but unparseable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_redirects = match lookup(MAX_REDIRECTS_VAR) {
            Some(raw) => parse_usize(MAX_REDIRECTS_VAR, &raw)?,
            None => DEFAULT_MAX_REDIRECTS,
        };
        Ok(Self { max_redirects })
    }

    /// Build config from variables captured at compile time, since a WASM
    /// build has no process environment. Falls back to defaults
    /// on invalid values.
    #[must_use]
    pub fn from_build_env() -> Self {
        let captured = option_env!("CHAT_MAX_REDIRECTS");
        Self::from_lookup(|var| match var {
            MAX_REDIRECTS_VAR => captured.map(str::to_owned),
            _ => None,
        })
        .unwrap_or_else(|e| {
            log::warn!("{e}; using default navigator config");
            Self::default()
        })
    }
}

fn parse_usize(var: &str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var: var.to_owned(), value: raw.to_owned() })
}
