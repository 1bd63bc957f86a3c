//! Runtime configuration for [`ShopSystem`](super::ShopSystem).
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SHOP_MAILBOX_CAPACITY` | `32` | mpsc buffer of every actor mailbox |
//! | `SHOP_SEED_CATALOG` | `true` | load the sample catalog on startup |

use thiserror::Error;

pub const MAILBOX_CAPACITY_VAR: &str = "SHOP_MAILBOX_CAPACITY";
pub const SEED_CATALOG_VAR: &str = "SHOP_SEED_CATALOG";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Mailbox capacity must be greater than zero")]
    ZeroCapacity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Requests an actor can queue before senders wait.
    pub mailbox_capacity: usize,
    pub seed_catalog: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            seed_catalog: true,
        }
    }
}

impl ShopConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup, falling back to
    /// the defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(MAILBOX_CAPACITY_VAR) {
            config.mailbox_capacity =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: MAILBOX_CAPACITY_VAR,
                        value: value.clone(),
                    })?;
        }
        if let Some(value) = lookup(SEED_CATALOG_VAR) {
            config.seed_catalog = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: SEED_CATALOG_VAR,
                        value,
                    })
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Tokio mpsc channels panic on a zero capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
