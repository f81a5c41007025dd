//! Engine configuration for waypath
//!
//! Configuration lives in a TOML file. Lookup order:
//! 1. an explicit path (the CLI `--config` flag)
//! 2. `$WAYPATH_CONFIG_DIR/config.toml`
//! 3. `<user config dir>/waypath/config.toml`
//!
//! A missing file yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SearchError};

pub use types::{
    EngineConfig, NeighborOrder, DEFAULT_BEAM_WIDTH, DEFAULT_COST, DEFAULT_HEURISTIC,
};

const CONFIG_DIR: &str = "waypath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYPATH_CONFIG_DIR";

impl EngineConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, validating its values
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SearchError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Load from an explicit path, or from the default location if one exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Default config file location, if a config directory can be determined
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()?.join(CONFIG_DIR)
        };

        Some(config_dir.join(CONFIG_FILE))
    }

    /// Reject values no strategy can run with
    pub fn validate(&self) -> Result<()> {
        if self.default_beam_width == 0 {
            crate::bail_invalid!("default_beam_width", "0 (must be at least 1)");
        }
        if !self.default_heuristic.is_finite() || self.default_heuristic < 0.0 {
            crate::bail_invalid!("default_heuristic", self.default_heuristic);
        }
        if !self.default_cost.is_finite() || self.default_cost < 0.0 {
            crate::bail_invalid!("default_cost", self.default_cost);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.default_beam_width, 2);
        assert_eq!(config.default_heuristic, 1.0);
        assert_eq!(config.default_cost, 1.0);
        assert_eq!(config.neighbor_order, NeighborOrder::Insertion);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = EngineConfig::from_toml_str("neighbor_order = \"sorted\"\n").unwrap();
        assert_eq!(config.neighbor_order, NeighborOrder::Sorted);
        assert_eq!(config.default_beam_width, DEFAULT_BEAM_WIDTH);
    }

    #[test]
    fn test_zero_beam_width_rejected() {
        let err = EngineConfig::from_toml_str("default_beam_width = 0\n").unwrap_err();
        assert!(matches!(err, SearchError::InvalidValue { .. }));
    }

    #[test]
    fn test_negative_default_cost_rejected() {
        let err = EngineConfig::from_toml_str("default_cost = -1.0\n").unwrap_err();
        assert!(matches!(err, SearchError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_beam_width = 3\ndefault_heuristic = 0.5\n").unwrap();

        let config = EngineConfig::discover(Some(path.as_path())).unwrap();
        assert_eq!(config.default_beam_width, 3);
        assert_eq!(config.default_heuristic, 0.5);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempdir().unwrap();
        let err = EngineConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_malformed_toml_is_toml_error() {
        let err = EngineConfig::from_toml_str("default_beam_width = \"wide\"").unwrap_err();
        assert!(matches!(err, SearchError::Toml(_)));
    }
}
