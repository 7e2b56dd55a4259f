//! CLI configuration.
//!
//! Stored at `<config_dir>/krishi/config.json`, or wherever `KRISHI_CONFIG` points.

use krishi_core::error::KrishiError;
use krishi_core::model::AreaUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_ENV: &str = "KRISHI_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Unit used when `--unit` is not given
    #[serde(default)]
    pub default_unit: AreaUnit,

    /// Output format when `--output` is not given (table, json)
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Custom dosage table used instead of the built-in reference table
    #[serde(default)]
    pub table: Option<PathBuf>,
}

fn default_output_format() -> String {
    "table".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_unit: AreaUnit::default(),
            output_format: default_output_format(),
            table: None,
        }
    }
}

impl Config {
    /// Resolve the config file path.
    pub fn path() -> Result<PathBuf, KrishiError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir()
            .ok_or_else(|| KrishiError::Config("could not determine config directory".into()))?;
        Ok(dir.join("krishi").join("config.json"))
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, KrishiError> {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!("{e}, using default configuration");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, KrishiError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| KrishiError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| KrishiError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.default_unit, AreaUnit::Acre);
        assert_eq!(config.output_format, "table");
        assert!(config.table.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "default_unit": "hectare" }"#).unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.default_unit, AreaUnit::Hectare);
        assert_eq!(config.output_format, "table");
    }

    #[test]
    fn test_env_var_overrides_config_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "output_format": "json" }"#).unwrap();

        // Only test in this binary that touches the variable
        std::env::set_var(CONFIG_ENV, file.path());
        let path = Config::path();
        let config = Config::load();
        std::env::remove_var(CONFIG_ENV);

        assert_eq!(path.unwrap(), file.path());
        assert_eq!(config.unwrap().output_format, "json");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(KrishiError::Config(_))
        ));
    }
}
