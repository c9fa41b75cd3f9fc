//! # Configuration State
//!
//! Session configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BASKET_*`)
//! 2. Defaults (this file)
//!
//! Read-only after loading, so no mutex.

use std::env;
use std::sync::Arc;

use basket_core::seed::demo_lists;
use basket_core::{Clock, ListStore, Money, SuggestionPolicy, SystemClock, RECENCY_WINDOW_DAYS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tracing filter when neither `RUST_LOG` nor `BASKET_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,basket=debug";

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Start with the "Weekly Market" / "Breakfast Run" demo lists
    pub seed_demo: bool,

    /// How many days a purchase silences its category's reminder
    pub recency_days: u32,

    /// Currency symbol (for display only)
    pub currency_symbol: String,

    /// tracing `EnvFilter` directive, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Demo lists: seeded
    /// - Recency window: 14 days
    /// - Currency: "$"
    /// - Log filter: `info,basket=debug`
    fn default() -> Self {
        ConfigState {
            seed_demo: true,
            recency_days: RECENCY_WINDOW_DAYS,
            currency_symbol: "$".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables over defaults.
    ///
    /// ## Environment Variables
    /// - `BASKET_SEED_DEMO`: `true` / `false`
    /// - `BASKET_RECENCY_DAYS`: positive integer
    /// - `BASKET_CURRENCY_SYMBOL`: any string
    /// - `BASKET_LOG`: tracing filter directive
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(value) = lookup("BASKET_SEED_DEMO") {
            config.seed_demo = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BASKET_SEED_DEMO".to_string()))?;
        }

        if let Some(value) = lookup("BASKET_RECENCY_DAYS") {
            config.recency_days = value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or_else(|| ConfigError::InvalidValue("BASKET_RECENCY_DAYS".to_string()))?;
        }

        if let Some(symbol) = lookup("BASKET_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(filter) = lookup("BASKET_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Suggestion tunables derived from this configuration.
    pub fn suggestion_policy(&self) -> SuggestionPolicy {
        SuggestionPolicy::from_days(self.recency_days)
    }

    /// Builds the store this configuration describes, on the system clock.
    pub fn build_store(&self) -> ListStore {
        self.build_store_with_clock(Arc::new(SystemClock))
    }

    /// Builds the store this configuration describes, reading time from
    /// `clock`. Demo items are stamped with the clock's current time.
    pub fn build_store_with_clock(&self, clock: Arc<dyn Clock>) -> ListStore {
        let lists = if self.seed_demo {
            demo_lists(clock.now())
        } else {
            Vec::new()
        };
        ListStore::with_lists(lists, clock).with_policy(self.suggestion_policy())
    }

    /// Formats money with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::Money;
    /// use basket_shell::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(7000)), "$70.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.major().abs(),
            amount.minor_part()
        )
    }
}

/// Configuration error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ConfigState, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("BASKET_SEED_DEMO", "false"),
            ("BASKET_RECENCY_DAYS", "7"),
            ("BASKET_CURRENCY_SYMBOL", "€"),
            ("BASKET_LOG", "warn"),
        ])
        .unwrap();

        assert!(!config.seed_demo);
        assert_eq!(config.recency_days, 7);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            load(&[("BASKET_SEED_DEMO", "maybe")]).unwrap_err(),
            ConfigError::InvalidValue("BASKET_SEED_DEMO".to_string())
        );
        assert_eq!(
            load(&[("BASKET_RECENCY_DAYS", "0")]).unwrap_err(),
            ConfigError::InvalidValue("BASKET_RECENCY_DAYS".to_string())
        );
        assert!(load(&[("BASKET_RECENCY_DAYS", "two weeks")]).is_err());
    }

    #[test]
    fn test_build_store_respects_seed_flag() {
        let seeded = ConfigState::default().build_store();
        assert_eq!(seeded.lists().len(), 2);

        let empty = ConfigState {
            seed_demo: false,
            ..ConfigState::default()
        }
        .build_store();
        assert!(empty.lists().is_empty());
    }

    #[test]
    fn test_build_store_uses_recency_window() {
        let config = ConfigState {
            recency_days: 7,
            ..ConfigState::default()
        };
        assert_eq!(config.build_store().policy(), SuggestionPolicy::from_days(7));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(config.format_currency(Money::from_cents(-5)), "-$0.05");
    }
}
