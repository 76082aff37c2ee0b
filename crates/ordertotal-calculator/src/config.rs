//! # Calculator Configuration
//!
//! Picks the empty-order policy the calculator runs with.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ORDERTOTAL_EMPTY_POLICY=error_on_empty                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/ordertotal/ordertotal.toml (Linux)                       │
//! │     ~/Library/Application Support/com.ordertotal.ordertotal/... (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     EmptyOrderPolicy::ZeroOnEmpty                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # ordertotal.toml
//! [totals]
//! empty_policy = "error_on_empty"  # zero_on_empty | error_on_empty
//! ```

use ordertotal_core::EmptyOrderPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CalculatorError, CalculatorResult};

/// Environment variable overriding [`TotalsSettings::empty_policy`].
pub const ENV_EMPTY_POLICY: &str = "ORDERTOTAL_EMPTY_POLICY";

/// File name of the config inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "ordertotal.toml";

// =============================================================================
// Totals Settings
// =============================================================================

/// How totals are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TotalsSettings {
    /// What an order without items totals to.
    #[serde(default)]
    pub empty_policy: EmptyOrderPolicy,
}

// =============================================================================
// Main Calculator Configuration
// =============================================================================

/// Complete calculator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Totals settings.
    #[serde(default)]
    pub totals: TotalsSettings,
}

impl CalculatorConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from TOML text. Missing sections take defaults.
    pub fn from_toml_str(contents: &str) -> CalculatorResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`ordertotal.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CalculatorResult<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`CalculatorConfig::load`], reading variables through `lookup`.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, lookup: F) -> CalculatorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading calculator config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup)?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load calculator config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> CalculatorResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CalculatorError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CalculatorError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .map_err(|e| CalculatorError::ConfigSaveFailed(e.to_string()))?;

        info!(path = %path.display(), "Calculator config saved");
        Ok(())
    }

    /// Applies overrides read through `lookup` (normally the process env).
    ///
    /// An override that does not parse is an error rather than silently
    /// falling back to the file value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CalculatorResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(ENV_EMPTY_POLICY) {
            let parsed = policy.parse::<EmptyOrderPolicy>().map_err(|e| {
                CalculatorError::InvalidConfig(format!("{}: {}", ENV_EMPTY_POLICY, e))
            })?;
            debug!(policy = %parsed, "Overriding empty-order policy from environment");
            self.totals.empty_policy = parsed;
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ordertotal", "ordertotal")
            .map(|dirs| config_file_in(dirs.config_dir()))
    }

    /// Returns the configured empty-order policy.
    pub fn empty_policy(&self) -> EmptyOrderPolicy {
        self.totals.empty_policy
    }
}

fn config_file_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("ordertotal-test-{}", uuid::Uuid::new_v4()))
            .join(CONFIG_FILE_NAME)
    }

    #[test]
    fn test_default_config() {
        let config = CalculatorConfig::default();
        assert_eq!(config.empty_policy(), EmptyOrderPolicy::ZeroOnEmpty);
    }

    #[test]
    fn test_from_toml_str() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            [totals]
            empty_policy = "error_on_empty"
            "#,
        )
        .unwrap();
        assert_eq!(config.empty_policy(), EmptyOrderPolicy::ErrorOnEmpty);

        // Missing sections fall back to defaults
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_policy() {
        let result = CalculatorConfig::from_toml_str(
            r#"
            [totals]
            empty_policy = "ignore"
            "#,
        );
        assert!(matches!(result, Err(CalculatorError::ConfigLoadFailed(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let config = CalculatorConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[totals]"));
        assert!(toml_str.contains("empty_policy = \"zero_on_empty\""));
    }

    #[test]
    fn test_env_override() {
        let mut config = CalculatorConfig::default();
        config
            .apply_overrides(|key| (key == ENV_EMPTY_POLICY).then(|| "error".to_string()))
            .unwrap();
        assert_eq!(config.empty_policy(), EmptyOrderPolicy::ErrorOnEmpty);
    }

    #[test]
    fn test_invalid_env_override() {
        let mut config = CalculatorConfig::default();
        let result = config.apply_overrides(|_| Some("sometimes".to_string()));
        assert!(matches!(result, Err(CalculatorError::InvalidConfig(_))));
        assert_eq!(config.empty_policy(), EmptyOrderPolicy::ZeroOnEmpty);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = CalculatorConfig::load_with_env(Some(scratch_path()), no_env).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path();
        let mut config = CalculatorConfig::new();
        config.totals.empty_policy = EmptyOrderPolicy::ErrorOnEmpty;
        config.save(Some(path.clone())).unwrap();

        let loaded = CalculatorConfig::load_with_env(Some(path.clone()), no_env).unwrap();
        assert_eq!(loaded, config);

        // Environment beats the file
        let overridden = CalculatorConfig::load_with_env(Some(path.clone()), |_| {
            Some("zero_on_empty".to_string())
        })
        .unwrap();
        assert_eq!(overridden.empty_policy(), EmptyOrderPolicy::ZeroOnEmpty);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_or_default_on_broken_file() {
        let path = scratch_path();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).unwrap();
        }
        std::fs::write(&path, "[totals\nempty_policy = ").unwrap();

        assert!(CalculatorConfig::load_with_env(Some(path.clone()), no_env).is_err());

        let config = CalculatorConfig::load_or_default(Some(path.clone()));
        assert_eq!(config, CalculatorConfig::default());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
