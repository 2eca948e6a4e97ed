//! # Configuration
//!
//! Everything about the coffeehouse that is data rather than behaviour: the price
//! list, how often the receipt printer jams, and how long anyone waits for an answer.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `COFFEEHOUSE_ASK_TIMEOUT_MS` | Deadline of every ask, in milliseconds | `2000` |
//! | `COFFEEHOUSE_JAM_PROBABILITY` | Chance that a print job jams the printer | `0.5` |
//! | `COFFEEHOUSE_SEED` | Seed for the printer's random source | random |

use crate::model::PriceList;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ASK_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_JAM_PROBABILITY: f64 = 0.5;

/// Errors raised while building a configuration.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("jam probability must be within 0.0..=1.0, got {0}")]
    JamProbability(f64),

    #[error("ask timeout must be greater than zero")]
    ZeroTimeout,

    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeehouseConfig {
    pub prices: PriceList,
    /// Probability that a single print job jams the printer.
    pub jam_probability: f64,
    /// Deadline used by the barista when asking the register, and by the register
    /// when asking the printer.
    pub ask_timeout: Duration,
    /// Seeds the printer's random source; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for CoffeehouseConfig {
    fn default() -> Self {
        Self {
            prices: PriceList::default(),
            jam_probability: DEFAULT_JAM_PROBABILITY,
            ask_timeout: DEFAULT_ASK_TIMEOUT,
            seed: None,
        }
    }
}

impl CoffeehouseConfig {
    /// Defaults overridden by `COFFEEHOUSE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(ms) = parse(&lookup, "COFFEEHOUSE_ASK_TIMEOUT_MS")? {
            config.ask_timeout = Duration::from_millis(ms);
        }
        if let Some(p) = parse(&lookup, "COFFEEHOUSE_JAM_PROBABILITY")? {
            config.jam_probability = p;
        }
        if let Some(seed) = parse(&lookup, "COFFEEHOUSE_SEED")? {
            config.seed = Some(seed);
        }
        config.validate()
    }

    pub fn with_jam_probability(mut self, probability: f64) -> Self {
        self.jam_probability = probability;
        self
    }

    pub fn with_ask_timeout(mut self, timeout: Duration) -> Self {
        self.ask_timeout = timeout;
        self
    }

    pub fn with_prices(mut self, prices: PriceList) -> Self {
        self.prices = prices;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&self.jam_probability) {
            return Err(ConfigError::JamProbability(self.jam_probability));
        }
        if self.ask_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self)
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CoffeehouseConfig::default().validate().unwrap();
        assert_eq!(config.ask_timeout, Duration::from_secs(2));
        assert_eq!(config.jam_probability, 0.5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_environment_overrides() {
        let config = CoffeehouseConfig::from_lookup(|var| match var {
            "COFFEEHOUSE_ASK_TIMEOUT_MS" => Some("50".into()),
            "COFFEEHOUSE_JAM_PROBABILITY" => Some("1".into()),
            "COFFEEHOUSE_SEED" => Some("42".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.ask_timeout, Duration::from_millis(50));
        assert_eq!(config.jam_probability, 1.0);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = CoffeehouseConfig::from_lookup(|var| {
            (var == "COFFEEHOUSE_SEED").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidVar {
                var: "COFFEEHOUSE_SEED",
                value: "lots".into()
            }
        );

        let err = CoffeehouseConfig::default()
            .with_jam_probability(1.5)
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigError::JamProbability(1.5));

        let err = CoffeehouseConfig::default()
            .with_ask_timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout);
    }
}
