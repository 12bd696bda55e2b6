//! Demo configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BASICS_SEED` | fixed seed for pseudo-random demos | entropy |
//! | `BASICS_RACE_MAX_MS` | upper bound of select-race producer delays | `250` |
//!
//! `RUST_LOG` is handled separately by [`crate::logging`].

use std::time::Duration;
use thiserror::Error;

use crate::rng::DemoRng;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable `{name}` has invalid value `{value}`: expected {expected}")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Settings shared by the demo binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Seed for pseudo-random output; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Exclusive upper bound for the producer delays in the select race.
    pub race_max: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            race_max: Duration::from_millis(Self::DEFAULT_RACE_MAX_MS),
        }
    }
}

impl DemoConfig {
    pub const SEED_VAR: &'static str = "BASICS_SEED";
    pub const RACE_MAX_VAR: &'static str = "BASICS_RACE_MAX_MS";
    pub const DEFAULT_RACE_MAX_MS: u64 = 250;

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use basics_common::DemoConfig;
    /// use std::time::Duration;
    ///
    /// let config = DemoConfig::from_lookup(|name| match name {
    ///     "BASICS_SEED" => Some("7".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.seed, Some(7));
    /// assert_eq!(config.race_max, Duration::from_millis(250));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::SEED_VAR) {
            config.seed = Some(parse_u64(Self::SEED_VAR, &raw, "an unsigned integer")?);
        }

        if let Some(raw) = lookup(Self::RACE_MAX_VAR) {
            let millis = parse_u64(Self::RACE_MAX_VAR, &raw, "a positive number of milliseconds")?;
            if millis == 0 {
                return Err(ConfigError::InvalidValue {
                    name: Self::RACE_MAX_VAR,
                    value: raw,
                    expected: "a positive number of milliseconds",
                });
            }
            config.race_max = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// Builds the random source described by this configuration.
    #[must_use]
    pub fn rng(&self) -> DemoRng {
        match self.seed {
            Some(seed) => DemoRng::seeded(seed),
            None => DemoRng::from_entropy(),
        }
    }
}

fn parse_u64(name: &'static str, raw: &str, expected: &'static str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
            expected,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let owned: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| {
            owned
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_reads_seed_and_race_bound() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("BASICS_SEED", " 42 "),
            ("BASICS_RACE_MAX_MS", "10"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.race_max, Duration::from_millis(10));
    }

    #[test]
    fn test_rejects_malformed_seed() {
        let err = DemoConfig::from_lookup(lookup_from(&[("BASICS_SEED", "forty-two")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { name: "BASICS_SEED", .. }
        ));
    }

    #[test]
    fn test_rejects_zero_race_bound() {
        let err = DemoConfig::from_lookup(lookup_from(&[("BASICS_RACE_MAX_MS", "0")])).unwrap_err();
        assert!(err.to_string().contains("BASICS_RACE_MAX_MS"));
    }

    #[test]
    fn test_seeded_config_gives_repeatable_rng() {
        let config = DemoConfig::from_lookup(lookup_from(&[("BASICS_SEED", "9")])).unwrap();
        let mut a = config.rng();
        let mut b = config.rng();
        let xs: Vec<u64> = (0..8).map(|_| a.int_n(1000)).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.int_n(1000)).collect();
        assert_eq!(xs, ys);
    }
}
