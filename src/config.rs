//! Application configuration
//!
//! Read from the environment, after loading a `.env` file if one exists.
//! Command-line flags take precedence over these values.

use std::env;

use crate::pricing::engine::UnknownAggregation;
use crate::pricing::{Aggregation, PricingOptions};

/// Line-item aggregation mode (`exact` or `rounded`)
pub const AGGREGATION_VAR: &str = "QUOTE_AGGREGATION";
/// Pretty-print JSON output (`true`/`false`/`1`/`0`)
pub const PRETTY_JSON_VAR: &str = "QUOTE_PRETTY_JSON";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("QUOTE_AGGREGATION: {0}")]
    Aggregation(#[from] UnknownAggregation),

    #[error("{var} must be true or false, got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub aggregation: Aggregation,
    pub pretty_json: bool,
}

impl Config {
    /// Load `.env` (if present) and read configuration from the environment.
    ///
    /// An explicit aggregation from the command line wins, and the
    /// environment value is then not parsed at all.
    pub fn load(aggregation: Option<Aggregation>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup_with(|key| env::var(key).ok(), aggregation)
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with(lookup, None)
    }

    /// Like `from_lookup`, with an aggregation that overrides the lookup
    pub fn from_lookup_with<F>(
        lookup: F,
        aggregation: Option<Aggregation>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let aggregation = match aggregation {
            Some(aggregation) => aggregation,
            None => match lookup(AGGREGATION_VAR) {
                Some(value) if !value.trim().is_empty() => value.parse()?,
                _ => Aggregation::default(),
            },
        };

        let pretty_json = match lookup(PRETTY_JSON_VAR) {
            Some(value) if !value.trim().is_empty() => parse_bool(PRETTY_JSON_VAR, &value)?,
            _ => false,
        };

        Ok(Self {
            aggregation,
            pretty_json,
        })
    }

    pub fn pricing_options(&self) -> PricingOptions {
        PricingOptions::new(self.aggregation)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
