//! Configuration loading and saving.
//!
//! Configuration lives in `config.yaml` under the platform config
//! directory. A missing file is not an error (every field has a default),
//! but a file that fails to parse or validate is.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur when loading or saving configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    Io(std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    Parse(serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error reading config: {e}"),
            ConfigError::Parse(e) => write!(f, "YAML parse error in config: {e}"),
            ConfigError::Validation(msg) => write!(f, "Config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Configuration for fontswap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default document to open when --document is not given
    #[serde(default)]
    pub document: Option<PathBuf>,

    /// Write the document back after each successful replace batch
    #[serde(default)]
    pub write_back: bool,

    /// Include fonts installed on the operating system in the catalog
    #[serde(default = "default_system_fonts")]
    pub system_fonts: bool,

    /// Extra directories scanned recursively for font files
    #[serde(default)]
    pub font_dirs: Vec<PathBuf>,

    /// Log level used when neither --log-level nor FONTSWAP_LOG is set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_system_fonts() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: None,
            write_back: false,
            system_fonts: default_system_fonts(),
            font_dirs: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Platform config directory for fontswap.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fontswap")
    }

    /// Default config file path.
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml_ng::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "unknown log_level '{}' (expected error, warn, info, debug, or trace)",
                self.log_level
            )));
        }
        Ok(())
    }

    /// The configured log level as a filter.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.document.is_none());
        assert!(!config.write_back);
        assert!(config.system_fonts);
        assert!(config.font_dirs.is_empty());
        assert_eq!(config.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.yaml")).unwrap();
        assert!(config.system_fonts);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            document: Some(PathBuf::from("designs/site.json")),
            write_back: true,
            system_fonts: false,
            font_dirs: vec![PathBuf::from("/opt/fonts")],
            log_level: "debug".into(),
        };
        config.save(&path).unwrap();
        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.document, config.document);
        assert!(reloaded.write_back);
        assert!(!reloaded.system_fonts);
        assert_eq!(reloaded.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "write_back: true\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert!(config.write_back);
        assert!(config.system_fonts, "unset fields keep their defaults");
    }

    #[test]
    fn test_bad_log_level_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "log_level: loud\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("log_level"));
    }
}
