//! Runtime configuration from environment variables.

use crate::model::TransitionPolicy;
use crate::prediction::DEFAULT_CROWD_SERVICE_URL;
use std::{env, fmt::Display, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value `{value}`: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub crowd_service_url: String,
    pub crowd_timeout: Duration,
    pub transition_policy: TransitionPolicy,
    pub channel_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            crowd_service_url: DEFAULT_CROWD_SERVICE_URL.to_string(),
            crowd_timeout: Duration::from_millis(2000),
            transition_policy: TransitionPolicy::Lenient,
            channel_buffer: 32,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let timeout_ms: u64 = try_load(&lookup, "CROWD_TIMEOUT_MS", "2000")?;
        let channel_buffer: usize = try_load(&lookup, "ORDER_CHANNEL_BUFFER", "32")?;
        if channel_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "ORDER_CHANNEL_BUFFER",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            port: try_load(&lookup, "CANTEEN_PORT", "8000")?,
            crowd_service_url: try_load(&lookup, "CROWD_SERVICE_URL", DEFAULT_CROWD_SERVICE_URL)?,
            crowd_timeout: Duration::from_millis(timeout_ms),
            transition_policy: try_load(&lookup, "ORDER_TRANSITIONS", "lenient")?,
            channel_buffer,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.transition_policy, TransitionPolicy::Lenient);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("CANTEEN_PORT", "9000"),
            ("CROWD_SERVICE_URL", "http://ml:5001/predict/crowd"),
            ("CROWD_TIMEOUT_MS", "250"),
            ("ORDER_TRANSITIONS", "Strict"),
            ("ORDER_CHANNEL_BUFFER", "64"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.crowd_service_url, "http://ml:5001/predict/crowd");
        assert_eq!(config.crowd_timeout, Duration::from_millis(250));
        assert_eq!(config.transition_policy, TransitionPolicy::Strict);
        assert_eq!(config.channel_buffer, 64);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for (key, value) in [
            ("CANTEEN_PORT", "eighty"),
            ("CROWD_TIMEOUT_MS", "-1"),
            ("ORDER_TRANSITIONS", "loose"),
            ("ORDER_CHANNEL_BUFFER", "0"),
        ] {
            let err = Config::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: k, .. } if k == key), "{key}={value}");
        }
    }
}
