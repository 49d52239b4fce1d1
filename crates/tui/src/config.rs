//! Environment-driven configuration.

use std::path::PathBuf;

use stocktally_inventory::view::DEFAULT_CURRENCY;
use stocktally_observability::LogTarget;
use thiserror::Error;

pub const CURRENCY_VAR: &str = "STOCKTALLY_CURRENCY";
pub const LOG_VAR: &str = "STOCKTALLY_LOG";

const MAX_CURRENCY_CHARS: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOCKTALLY_CURRENCY must be 1 to 4 characters, got {0:?}")]
    InvalidCurrency(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Symbol prefixed to every amount.
    pub currency: String,
    /// Logging is off unless a file is named; the screen owns stdout.
    pub log: LogTarget,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            log: LogTarget::Disabled,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    ///
    /// An unset variable means "default". An empty `STOCKTALLY_LOG` also keeps
    /// logging off, but a blank `STOCKTALLY_CURRENCY` is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(currency) = lookup(CURRENCY_VAR) {
            let trimmed = currency.trim();
            let chars = trimmed.chars().count();
            if chars == 0 || chars > MAX_CURRENCY_CHARS {
                return Err(ConfigError::InvalidCurrency(currency));
            }
            config.currency = trimmed.to_string();
        }

        if let Some(path) = lookup(LOG_VAR).filter(|p| !p.trim().is_empty()) {
            config.log = LogTarget::File(PathBuf::from(path));
        }

        Ok(config)
    }
}
