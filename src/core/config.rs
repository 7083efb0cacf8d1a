//! Table configuration.
//!
//! Defaults are the standard game: ante 1, bet size 1. The seed drives the
//! deal stream; `hands` is only read by the self-play driver.
//!
//! Configs can be built in code with the `with_*` setters or loaded from
//! TOML, where every field is optional:
//!
//! ```toml
//! ante = 1
//! bet_size = 1
//! seed = 7
//! hands = 10000
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::ConfigError;

/// Configuration for an engine or environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KuhnConfig {
    /// Chips each player posts before the deal.
    pub ante: i32,

    /// Chips added by a bet or a call.
    pub bet_size: i32,

    /// Seed for the deal RNG.
    /// Same seed produces the same sequence of deals.
    pub seed: u64,

    /// Number of hands played by the self-play driver.
    pub hands: usize,
}

impl Default for KuhnConfig {
    fn default() -> Self {
        Self {
            ante: 1,
            bet_size: 1,
            seed: 42,
            hands: 1_000,
        }
    }
}

impl KuhnConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ante.
    pub fn with_ante(mut self, ante: i32) -> Self {
        self.ante = ante;
        self
    }

    /// Set the bet size.
    pub fn with_bet_size(mut self, bet_size: i32) -> Self {
        self.bet_size = bet_size;
        self
    }

    /// Set the deal seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of self-play hands.
    pub fn with_hands(mut self, hands: usize) -> Self {
        self.hands = hands;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: KuhnConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Write the configuration as TOML.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let source = toml::to_string_pretty(self)?;
        std::fs::write(path, source)?;
        Ok(())
    }

    /// Check that stakes are positive and that a full pot fits in `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_stakes(self.ante, self.bet_size)
    }
}

/// Stakes every hand relies on: both positive, and both players' full
/// contributions (`2 * (ante + bet_size)`) representable.
pub(crate) fn check_stakes(ante: i32, bet_size: i32) -> Result<(), ConfigError> {
    if ante <= 0 {
        return Err(ConfigError::Invalid {
            field: "ante",
            message: format!("must be positive, got {ante}"),
        });
    }
    if bet_size <= 0 {
        return Err(ConfigError::Invalid {
            field: "bet_size",
            message: format!("must be positive, got {bet_size}"),
        });
    }
    let full_pot = ante.checked_add(bet_size).and_then(|c| c.checked_mul(2));
    if full_pot.is_none() {
        return Err(ConfigError::Invalid {
            field: "bet_size",
            message: format!("pot overflows with ante {ante} and bet size {bet_size}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = KuhnConfig::default();
        assert_eq!(config.ante, 1);
        assert_eq!(config.bet_size, 1);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = KuhnConfig::new()
            .with_ante(2)
            .with_bet_size(3)
            .with_seed(123)
            .with_hands(10);

        assert_eq!(config.ante, 2);
        assert_eq!(config.bet_size, 3);
        assert_eq!(config.seed, 123);
        assert_eq!(config.hands, 10);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = KuhnConfig::from_toml_str("seed = 7\nhands = 50\n").unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.hands, 50);
        assert_eq!(config.ante, 1);
        assert_eq!(config.bet_size, 1);
    }

    #[test]
    fn test_toml_rejects_non_positive_stakes() {
        let err = KuhnConfig::from_toml_str("ante = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ante", .. }));

        let err = KuhnConfig::from_toml_str("bet_size = -1").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bet_size", .. }));
    }

    #[test]
    fn test_zero_and_negative_stakes_rejected() {
        let err = KuhnConfig::default().with_bet_size(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bet_size", .. }));

        let err = KuhnConfig::default().with_bet_size(-1).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bet_size", .. }));

        let err = KuhnConfig::default().with_ante(-3).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ante", .. }));
    }

    #[test]
    fn test_overflowing_stakes_rejected() {
        assert!(KuhnConfig::from_toml_str("ante = 2147483647").is_err());
        assert!(KuhnConfig::default().with_bet_size(i32::MAX).validate().is_err());

        let half = i32::MAX / 2;
        assert!(KuhnConfig::default().with_ante(half).validate().is_err());
        assert!(KuhnConfig::default().with_ante(half - 1).validate().is_ok());
    }

    #[test]
    fn test_toml_parse_error() {
        let err = KuhnConfig::from_toml_str("ante = \"one\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_serialization() {
        let config = KuhnConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: KuhnConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_file_roundtrip() {
        let config = KuhnConfig::new().with_ante(2).with_bet_size(3).with_seed(5);
        let temp_file = NamedTempFile::new().unwrap();

        config.to_file(temp_file.path()).unwrap();
        let loaded = KuhnConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_file_is_validated() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "seed = 3").unwrap();
        writeln!(temp_file, "bet_size = 0").unwrap();

        let err = KuhnConfig::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "bet_size", .. }));
    }

    #[test]
    fn test_missing_config_file() {
        let err = KuhnConfig::from_file("/nonexistent/kuhn.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
