//! Runtime configuration.
//!
//! Everything has a default, so an empty TOML document (or no file at all) yields a
//! working system. `DAO_FACTORY_MAILBOX_CAPACITY` overrides the mailbox size.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const MAILBOX_CAPACITY_ENV: &str = "DAO_FACTORY_MAILBOX_CAPACITY";

const DAY_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Upper bounds applied when validating a governance configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyLimits {
    pub max_identity_len: usize,
    pub max_voting_period_secs: i64,
    pub max_execution_delay_secs: i64,
}

impl Default for PolicyLimits {
    fn default() -> Self {
        Self {
            max_identity_len: 256,
            max_voting_period_secs: 365 * DAY_SECS,
            max_execution_delay_secs: 30 * DAY_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Buffer size of every actor mailbox.
    pub mailbox_capacity: usize,
    pub limits: PolicyLimits,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            limits: PolicyLimits::default(),
        }
    }
}

impl SystemConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SystemConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file at `path`, then applies environment overrides.
    /// A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::from_toml_str(&std::fs::read_to_string(path)?)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies overrides looked up by `var` (normally the process environment).
    pub fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = var(MAILBOX_CAPACITY_ENV) {
            self.mailbox_capacity = raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: MAILBOX_CAPACITY_ENV,
                reason: format!("{raw:?}: {e}"),
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // tokio panics on a zero-capacity channel
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                key: "mailbox_capacity",
                reason: "must be greater than zero".into(),
            });
        }
        if self.limits.max_voting_period_secs < 0 || self.limits.max_execution_delay_secs < 0 {
            return Err(ConfigError::InvalidValue {
                key: "limits",
                reason: "duration maxima must not be negative".into(),
            });
        }
        Ok(())
    }
}
