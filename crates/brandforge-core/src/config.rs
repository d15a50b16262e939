//! Configuration management for Brandforge.
//!
//! Configuration is loaded from a platform-appropriate `config.toml` with
//! sensible defaults. Besides API and logging settings, the file can carry
//! `[[catalog.palettes]]` / `[[catalog.styles]]` / `[[catalog.graphic_types]]`
//! tables that extend the seed catalogs at load time.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::{Catalogs, ColorScheme, GraphicType, VisualStyle};
use crate::error::ConfigError;

/// Root configuration structure for Brandforge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generative API settings
    pub api: ApiConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Catalog extensions appended to the built-in catalogs
    pub catalog: CatalogConfig,
}

/// Settings for the generative image API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Model identifier
    pub model: String,

    /// API base URL (the model name and operation are appended per request)
    pub endpoint: String,

    /// API key, or a `${ENV_VAR}` reference resolved at provider creation
    pub api_key: String,

    /// Transport timeout in milliseconds, applied at the HTTP client level
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash-image".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            api_key: "${GEMINI_API_KEY}".to_string(),
            timeout_ms: 120_000,
        }
    }
}

/// Where generated images are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for saved images (supports ~ expansion)
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", or "trace"
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// User-supplied catalog extensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub palettes: Vec<ColorScheme>,
    pub styles: Vec<VisualStyle>,
    pub graphic_types: Vec<GraphicType>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories, falling back to
    /// `~/.brandforge/config.toml` if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("io", "brandforge", "brandforge")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".brandforge").join("config.toml")
            })
    }

    /// Get the resolved output directory (with ~ expansion).
    pub fn output_dir(&self) -> PathBuf {
        let path_str = self.output.directory.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.into_owned())
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the full catalogs: built-in entries plus config extensions.
    pub fn catalogs(&self) -> Result<Catalogs, ConfigError> {
        let mut catalogs = Catalogs::builtin();
        for palette in &self.catalog.palettes {
            catalogs
                .add_color_scheme(palette.clone())
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }
        for style in &self.catalog.styles {
            catalogs
                .add_style(style.clone())
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }
        for graphic_type in &self.catalog.graphic_types {
            catalogs
                .add_graphic_type(graphic_type.clone())
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }
        Ok(catalogs)
    }

    /// Validate configuration values.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.api.model.is_empty() {
            return Err(ConfigError::ValidationError(
                "api.model must not be empty".into(),
            ));
        }
        if self.api.endpoint.is_empty() {
            return Err(ConfigError::ValidationError(
                "api.endpoint must not be empty".into(),
            ));
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "api.timeout_ms must be > 0".into(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(
                "logging.format must be \"pretty\" or \"json\"".into(),
            ));
        }
        // Surfaces duplicate ids between seed and config entries
        self.catalogs().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn test_catalog_extension_appends() {
        let mut config = Config::default();
        config.catalog.palettes.push(ColorScheme {
            id: "acme".to_string(),
            name: "Acme Corp".to_string(),
            colors: vec!["#FF0000".to_string(), "#00FF00".to_string()],
        });
        let catalogs = config.catalogs().unwrap();
        assert_eq!(catalogs.color_scheme("acme").unwrap().name, "Acme Corp");
        // Built-ins are still present
        assert!(catalogs.color_scheme("ocean").is_some());
    }

    #[test]
    fn test_catalog_extension_rejects_duplicate_of_builtin() {
        let mut config = Config::default();
        config.catalog.palettes.push(ColorScheme {
            id: "ocean".to_string(),
            name: "Shadowing Ocean".to_string(),
            colors: vec!["#000000".to_string()],
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ocean"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
model = "test-model"
timeout_ms = 5000

[logging]
level = "debug"

[[catalog.styles]]
id = "neon"
name = "Neon"
description = "vivid neon design with glow effects"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api.model, "test-model");
        assert_eq!(config.api.timeout_ms, 5000);
        assert_eq!(config.logging.level, "debug");
        // Unspecified sections fall back to defaults
        assert_eq!(config.logging.format, "pretty");
        assert!(config.api.endpoint.contains("generativelanguage"));

        let catalogs = config.catalogs().unwrap();
        assert!(catalogs.style("neon").is_some());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = Config::default();
        let toml_str = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.api.model, config.api.model);
        assert_eq!(parsed.api.timeout_ms, config.api.timeout_ms);
    }
}
