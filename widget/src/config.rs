//! # Widget Configuration
//!
//! Settings loaded from environment variables (and a `.env` file, read by the
//! host through `dotenvy`). Validated once on startup so a misconfigured host
//! fails before any window opens.
//!
//! ```rust,no_run
//! use trade_widget::config::WidgetConfig;
//!
//! let config = WidgetConfig::from_env()?;
//! config.validate()?;
//! # Ok::<(), String>(())
//! ```

use crate::utils::units::parse_token_amount;
use shared::{Address, NetworkId, U256};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Host configuration for the buy widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// JSON-RPC endpoint of the Ethereum node
    pub rpc_url: String,

    /// Network the exchange deployment is looked up for
    pub network_id: NetworkId,

    /// Purchase amount before the first input, in base units.
    ///
    /// `WIDGET_DEFAULT_AMOUNT=""` disables the default.
    pub default_amount: Option<U256>,

    /// Contract artifacts listing exchange deployments per network
    pub artifacts_path: PathBuf,

    /// Quote book served by the demo store
    pub quote_book_path: PathBuf,

    /// Taker account; the node must be able to sign for it
    pub account: Option<Address>,

    /// Interval between receipt polls.
    ///
    /// Valid range: 100-60000 ms
    pub confirmation_poll_ms: u64,

    /// How long to wait for a receipt before giving up.
    ///
    /// Valid range: 1-3600 s
    pub confirmation_timeout_secs: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            network_id: NetworkId(50),
            default_amount: Some(U256::from(10u64).pow(U256::from(18u64))),
            artifacts_path: PathBuf::from("artifacts/exchange.json"),
            quote_book_path: PathBuf::from("artifacts/quotes.json"),
            account: None,
            confirmation_poll_ms: 1000,
            confirmation_timeout_secs: 300,
        }
    }
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let defaults = Self::default();

        let rpc_url = lookup("WIDGET_RPC_URL").unwrap_or(defaults.rpc_url);

        let network_id = match lookup("WIDGET_NETWORK_ID") {
            Some(raw) => NetworkId(parse_number("WIDGET_NETWORK_ID", &raw)?),
            None => defaults.network_id,
        };

        let default_amount = match lookup("WIDGET_DEFAULT_AMOUNT") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(
                parse_token_amount(&raw)
                    .map_err(|e| format!("WIDGET_DEFAULT_AMOUNT must be a decimal amount: {}", e))?,
            ),
            None => defaults.default_amount,
        };

        let artifacts_path = lookup("WIDGET_ARTIFACTS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.artifacts_path);

        let quote_book_path = lookup("WIDGET_QUOTE_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.quote_book_path);

        let account = match lookup("WIDGET_ACCOUNT") {
            Some(raw) if !raw.trim().is_empty() => Some(
                Address::from_str(raw.trim())
                    .map_err(|e| format!("WIDGET_ACCOUNT must be a 20-byte hex address: {}", e))?,
            ),
            _ => None,
        };

        let confirmation_poll_ms = match lookup("WIDGET_CONFIRMATION_POLL_MS") {
            Some(raw) => parse_number("WIDGET_CONFIRMATION_POLL_MS", &raw)?,
            None => defaults.confirmation_poll_ms,
        };

        let confirmation_timeout_secs = match lookup("WIDGET_CONFIRMATION_TIMEOUT_SECS") {
            Some(raw) => parse_number("WIDGET_CONFIRMATION_TIMEOUT_SECS", &raw)?,
            None => defaults.confirmation_timeout_secs,
        };

        Ok(Self {
            rpc_url,
            network_id,
            default_amount,
            artifacts_path,
            quote_book_path,
            account,
            confirmation_poll_ms,
            confirmation_timeout_secs,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err("WIDGET_RPC_URL must be an http(s) URL".to_string());
        }

        if !(100..=60_000).contains(&self.confirmation_poll_ms) {
            return Err("WIDGET_CONFIRMATION_POLL_MS must be between 100 and 60000".to_string());
        }

        if !(1..=3600).contains(&self.confirmation_timeout_secs) {
            return Err("WIDGET_CONFIRMATION_TIMEOUT_SECS must be between 1 and 3600".to_string());
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.confirmation_poll_ms)
    }

    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse()
        .map_err(|e| format!("{} must be a valid number: {}", key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<WidgetConfig, String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        WidgetConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.default_amount, Some(U256::from(1_000_000_000_000_000_000u128)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("WIDGET_RPC_URL", "https://node.example:8545"),
            ("WIDGET_NETWORK_ID", "42"),
            ("WIDGET_DEFAULT_AMOUNT", "0.5"),
            ("WIDGET_ACCOUNT", "0x5409ed021d9299bf6814279a6a1411a7e866a631"),
            ("WIDGET_CONFIRMATION_POLL_MS", "250"),
        ])
        .unwrap();

        assert_eq!(config.network_id, NetworkId(42));
        assert_eq!(config.default_amount, Some(U256::from(500_000_000_000_000_000u128)));
        assert!(config.account.is_some());
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_default_amount_disables_default() {
        assert_eq!(config(&[("WIDGET_DEFAULT_AMOUNT", "")]).unwrap().default_amount, None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(config(&[("WIDGET_NETWORK_ID", "kovan")]).is_err());
        assert!(config(&[("WIDGET_DEFAULT_AMOUNT", "-1")]).is_err());
        assert!(config(&[("WIDGET_ACCOUNT", "0x1234")]).is_err());
    }

    #[test]
    fn test_validation_ranges() {
        let mut config = WidgetConfig::default();
        config.confirmation_poll_ms = 50;
        assert!(config.validate().is_err());

        let mut config = WidgetConfig::default();
        config.confirmation_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = WidgetConfig::default();
        config.rpc_url = "ws://127.0.0.1:8546".to_string();
        assert!(config.validate().is_err());
    }
}
