//! Page-level configuration.
//!
//! Every field has a default, so a page without a config block behaves exactly
//! like one with `{}`. Pages may override values through an inline JSON block
//! (`<script type="application/json" id="site-config">`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::{DEFAULT_REVEAL_SELECTORS, FALLBACK_STAGGER_MS, PRINT_PROMPT, REVEAL_THRESHOLD, THEME_KEY};

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reveal threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme_key: String,
    pub reveal_threshold: f64,
    pub fallback_stagger_ms: u32,
    pub reveal_selectors: Vec<String>,
    pub print_prompt: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_key: THEME_KEY.to_owned(),
            reveal_threshold: REVEAL_THRESHOLD,
            fallback_stagger_ms: FALLBACK_STAGGER_MS,
            reveal_selectors: DEFAULT_REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            print_prompt: PRINT_PROMPT.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block. Missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if !(0.0..=1.0).contains(&config.reveal_threshold) {
            return Err(ConfigError::InvalidThreshold(config.reveal_threshold));
        }
        config.log_level()?;
        Ok(config)
    }

    /// Resolve the configured log level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(self.log_level.trim()).map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Config for a page whose config block may be absent or blank.
    pub fn from_page(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::default()),
        }
    }
}
