//! Configuration for GOV.UK component rendering.
//!
//! Parses `govuk.toml` files with serde and provides auto-discovery of the
//! config file in parent directories.
//!
//! ```toml
//! [button]
//! prevent_double_click = true
//!
//! [date_input]
//! converters = ["naive-date", "date"]
//! ```
//!
//! Every section and field is optional; missing values take the defaults of
//! the design system.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "govuk.toml";

/// Names of the built-in date input model converters, in default order.
pub const BUILT_IN_DATE_CONVERTERS: &[&str] = &["date", "naive-date"];

/// Component configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Button defaults.
    pub button: ButtonConfig,
    /// Date input model binding.
    pub date_input: DateInputConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Defaults applied to `<govuk-button>` and `<govuk-button-link>`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonConfig {
    /// Default for the `prevent-double-click` attribute when it is not specified.
    pub prevent_double_click: bool,
}

/// Date input model conversion.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateInputConfig {
    /// Built-in converters to register, in order. The first converter whose
    /// model type matches wins.
    pub converters: Vec<String>,
}

impl Default for DateInputConfig {
    fn default() -> Self {
        Self {
            converters: BUILT_IN_DATE_CONVERTERS
                .iter()
                .map(|&name| name.to_owned())
                .collect(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `govuk.toml` in the current directory and its parents, falling back
    /// to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys, and
    /// `ConfigError::Validation` for invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for the config file in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_date_input()
    }

    fn validate_date_input(&self) -> Result<(), ConfigError> {
        let converters = &self.date_input.converters;

        for (idx, name) in converters.iter().enumerate() {
            if !BUILT_IN_DATE_CONVERTERS.contains(&name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "date_input.converters: unknown converter '{name}' (expected one of: {})",
                    BUILT_IN_DATE_CONVERTERS.join(", ")
                )));
            }
            if converters[..idx].contains(name) {
                return Err(ConfigError::Validation(format!(
                    "date_input.converters: '{name}' is listed more than once"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.button.prevent_double_click);
        assert_eq!(config.date_input.converters, vec!["date", "naive-date"]);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert!(!config.button.prevent_double_click);
        assert_eq!(config.date_input.converters.len(), 2);
    }

    #[test]
    fn test_parse_button_config() {
        let config = Config::from_toml_str("[button]\nprevent_double_click = true\n").unwrap();
        assert!(config.button.prevent_double_click);
    }

    #[test]
    fn test_parse_converter_order() {
        let config =
            Config::from_toml_str("[date_input]\nconverters = [\"naive-date\"]\n").unwrap();
        assert_eq!(config.date_input.converters, vec!["naive-date"]);
    }

    #[test]
    fn test_unknown_converter_is_rejected() {
        let err = Config::from_toml_str("[date_input]\nconverters = [\"datetime\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("'datetime'")));
    }

    #[test]
    fn test_duplicate_converter_is_rejected() {
        let err = Config::from_toml_str("[date_input]\nconverters = [\"date\", \"date\"]\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("more than once")));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::from_toml_str("[button]\ncolour = \"green\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/govuk.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_explicit_file_sets_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("govuk.toml");
        std::fs::write(&path, "[button]\nprevent_double_click = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert!(config.button.prevent_double_click);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("views").join("shared");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("govuk.toml"), "").unwrap();

        let found = Config::discover_from(&nested).unwrap();

        assert_eq!(found, dir.path().join("govuk.toml"));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::Validation("bad".to_owned());
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
