//! Session configuration.
//!
//! Controls how generated ids look and whether the random source is seeded.
//! The interactive terminal always runs with [`SessionConfig::default`];
//! tests and the headless harness pass their own.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("id prefix must not be empty")]
    EmptyPrefix,
    #[error("id range is empty: min {min} > max {max}")]
    EmptyIdRange { min: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Prepended to every generated id.
    pub id_prefix: String,
    /// Inclusive lower bound of the numeric id suffix.
    pub id_min: u32,
    /// Inclusive upper bound of the numeric id suffix.
    pub id_max: u32,
    /// Seed for a deterministic random source; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            id_prefix: "OBJ-".to_string(),
            id_min: 100,
            id_max: 999,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if self.id_min > self.id_max {
            return Err(ConfigError::EmptyIdRange {
                min: self.id_min,
                max: self.id_max,
            });
        }
        Ok(())
    }

    /// Build an object id from a numeric suffix.
    pub fn format_id(&self, suffix: u32) -> String {
        format!("{}{}", self.id_prefix, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.format_id(417), "OBJ-417");
    }

    #[test]
    fn test_rejects_empty_prefix() {
        let config = SessionConfig {
            id_prefix: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPrefix));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = SessionConfig {
            id_min: 10,
            id_max: 5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyIdRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn test_single_value_range_is_valid() {
        let config = SessionConfig {
            id_min: 7,
            id_max: 7,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
