//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and have sensible defaults.
//!
//! - `LILIES_DATA_DIR` - Directory for the durable storage bucket file
//!   (default: `./data`)
//! - `LILIES_NETWORK_DELAY_MS` - Artificial latency applied to register and
//!   login, simulating a network round-trip (default: 1000)
//! - `LILIES_DELIVERY_FEE` - Flat delivery fee in naira added at checkout
//!   (default: 500)

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use lilies_core::{CurrencyCode, Money};

/// Default artificial latency for the simulated register/login round-trip.
const DEFAULT_NETWORK_DELAY_MS: u64 = 1000;

/// Default flat delivery fee in naira.
const DEFAULT_DELIVERY_FEE: i64 = 500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the durable storage bucket file
    pub data_dir: PathBuf,
    /// Artificial latency applied to register/login
    pub network_delay: Duration,
    /// Flat delivery fee added to the cart subtotal at checkout
    pub delivery_fee: Money,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but cannot
    /// be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let data_dir = env::var("LILIES_DATA_DIR").map_or_else(|_| PathBuf::from("data"), PathBuf::from);

        let network_delay = match env::var("LILIES_NETWORK_DELAY_MS") {
            Ok(raw) => {
                let ms: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "LILIES_NETWORK_DELAY_MS".to_owned(),
                        format!("expected a number of milliseconds, got {raw:?}"),
                    )
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => Duration::from_millis(DEFAULT_NETWORK_DELAY_MS),
        };

        let delivery_fee = match env::var("LILIES_DELIVERY_FEE") {
            Ok(raw) => {
                let amount: Decimal = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        "LILIES_DELIVERY_FEE".to_owned(),
                        format!("expected a decimal amount, got {raw:?}"),
                    )
                })?;
                Money::new(amount, CurrencyCode::NGN)
            }
            Err(_) => Money::naira(DEFAULT_DELIVERY_FEE),
        };

        Ok(Self {
            data_dir,
            network_delay,
            delivery_fee,
        })
    }

    /// Configuration with no artificial latency, for tests.
    #[must_use]
    pub fn without_delay() -> Self {
        Self {
            network_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            network_delay: Duration::from_millis(DEFAULT_NETWORK_DELAY_MS),
            delivery_fee: Money::naira(DEFAULT_DELIVERY_FEE),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.network_delay, Duration::from_millis(1000));
        assert_eq!(config.delivery_fee, Money::naira(500));
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_without_delay() {
        assert_eq!(StorefrontConfig::without_delay().network_delay, Duration::ZERO);
    }
}
