//! Registry configuration.

use stockbook_core::{DomainError, DomainResult};

use crate::number::validate_prefix;

pub const ENV_NUMBER_PREFIX: &str = "STOCKBOOK_NUMBER_PREFIX";
pub const ENV_SEED_SAMPLE: &str = "STOCKBOOK_SEED_SAMPLE";

pub const DEFAULT_NUMBER_PREFIX: &str = "EM";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Leading segment of every item number (`EM` in `EM/02/2026/001`).
    pub number_prefix: String,
    /// Start with the built-in sample items instead of an empty collection.
    pub seed_sample_items: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            number_prefix: DEFAULT_NUMBER_PREFIX.to_string(),
            seed_sample_items: false,
        }
    }
}

impl RegistryConfig {
    /// Read overrides from the process environment; unset variables keep defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RegistryConfig::from_env`], reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(prefix) = lookup(ENV_NUMBER_PREFIX) {
            config = config.with_prefix(prefix.trim())?;
        }

        if let Some(raw) = lookup(ENV_SEED_SAMPLE) {
            config.seed_sample_items = parse_flag(&raw).ok_or_else(|| {
                DomainError::config(format!("{ENV_SEED_SAMPLE} must be a boolean, got {raw:?}"))
            })?;
        }

        Ok(config)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> DomainResult<Self> {
        let prefix = prefix.into();
        validate_prefix(&prefix).map_err(|e| DomainError::config(e.to_string()))?;
        self.number_prefix = prefix;
        Ok(self)
    }

    pub fn with_sample_items(mut self, seed: bool) -> Self {
        self.seed_sample_items = seed;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = RegistryConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.number_prefix, "EM");
        assert!(!config.seed_sample_items);
    }

    #[test]
    fn reads_prefix_and_seed_flag() {
        let config = RegistryConfig::from_lookup(lookup(&[
            (ENV_NUMBER_PREFIX, " INV "),
            (ENV_SEED_SAMPLE, "yes"),
        ]))
        .unwrap();
        assert_eq!(config.number_prefix, "INV");
        assert!(config.seed_sample_items);
    }

    #[test]
    fn rejects_prefix_with_separator() {
        let err = RegistryConfig::from_lookup(lookup(&[(ENV_NUMBER_PREFIX, "E/M")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn rejects_unparseable_flag() {
        let err = RegistryConfig::from_lookup(lookup(&[(ENV_SEED_SAMPLE, "maybe")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }
}
