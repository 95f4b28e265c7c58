//! Configuration management for the travel month service
//!
//! Settings come from built-in defaults, an optional TOML file and
//! `TRAVELMONTH_`-prefixed environment variables. The conventional `PORT`
//! variable always decides the listening port.

use crate::{Result, TravelError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

const CONFIG_PATH_VAR: &str = "TRAVELMONTH_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "travelmonth.toml";

/// Most pages the knowledge API returns intro extracts for in one call
pub const MAX_PAGES_PER_BATCH: u32 = 20;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Knowledge API settings
    pub search: SearchConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind, all interfaces by default
    pub host: String,
    /// Listening port
    pub port: u16,
    /// Maximum accepted request body in bytes
    pub body_limit_bytes: usize,
}

/// Knowledge API (Wikipedia action API) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Action API endpoint
    pub base_url: String,
    /// Identifying User-Agent sent with every call
    pub user_agent: String,
    /// Geosearch radius in meters
    pub radius_meters: u32,
    /// Maximum pages returned by the geosearch
    pub geo_limit: u32,
    /// Maximum pages returned by the free-text fallback
    pub text_limit: u32,
    /// Length cap for page extracts, in characters
    pub extract_chars: u32,
    /// Request timeout; the client default (none) when unset
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            body_limit_bytes: 64 * 1024,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org/w/api.php".to_string(),
            user_agent: "TravelTimeApp/1.0 (contact@example.com)".to_string(),
            radius_meters: 10_000,
            geo_limit: 10,
            text_limit: 5,
            extract_chars: 600,
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        let port = env::var("PORT").ok();
        Self::load_from_path(&path, port.as_deref())
    }

    /// Load configuration from the given file, then apply environment
    /// overrides and the raw `PORT` value
    pub fn load_from_path(path: &std::path::Path, port: Option<&str>) -> Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .required(false)
                    .format(FileFormat::Toml),
            )
            .add_source(
                Environment::with_prefix("TRAVELMONTH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| TravelError::config(format!("Failed to build configuration: {e}")))?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| TravelError::config(format!("Failed to deserialize configuration: {e}")))?;

        config.apply_port_override(port)?;
        config.validate()?;

        Ok(config)
    }

    /// Apply the value of the `PORT` variable, if any
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<()> {
        let Some(raw) = port else {
            return Ok(());
        };
        self.server.port = raw.trim().parse().map_err(|_| {
            TravelError::config(format!("PORT must be a port number, got '{raw}'"))
        })?;
        Ok(())
    }

    /// Address the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_server()?;
        self.validate_search()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TravelError::config("Server port cannot be 0"));
        }
        if self.server.host.trim().is_empty() {
            return Err(TravelError::config("Server host cannot be empty"));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(TravelError::config("Request body limit cannot be 0"));
        }
        Ok(())
    }

    fn validate_search(&self) -> Result<()> {
        let search = &self.search;

        if !search.base_url.starts_with("http://") && !search.base_url.starts_with("https://") {
            return Err(TravelError::config(
                "Search API base URL must be a valid HTTP or HTTPS URL",
            ));
        }

        if search.user_agent.trim().is_empty() {
            return Err(TravelError::config("Search API user agent cannot be empty"));
        }

        if !(10..=10_000).contains(&search.radius_meters) {
            return Err(TravelError::config(
                "Search radius must be between 10 and 10000 meters",
            ));
        }

        // Every hit goes into one details request, which returns at most
        // MAX_PAGES_PER_BATCH intro extracts.
        if !(1..=MAX_PAGES_PER_BATCH).contains(&search.geo_limit) {
            return Err(TravelError::config(format!(
                "Geosearch limit must be between 1 and {MAX_PAGES_PER_BATCH}"
            )));
        }

        if !(1..=MAX_PAGES_PER_BATCH).contains(&search.text_limit) {
            return Err(TravelError::config(format!(
                "Text search limit must be between 1 and {MAX_PAGES_PER_BATCH}"
            )));
        }

        if !(1..=1200).contains(&search.extract_chars) {
            return Err(TravelError::config(
                "Extract length must be between 1 and 1200 characters",
            ));
        }

        if search.timeout_seconds == Some(0) {
            return Err(TravelError::config("Search API timeout cannot be 0 seconds"));
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.base_url, "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.search.radius_meters, 10_000);
        assert_eq!(config.search.geo_limit, 10);
        assert_eq!(config.search.text_limit, 5);
        assert_eq!(config.search.extract_chars, 600);
        assert!(config.search.timeout_seconds.is_none());
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some("9090")).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.bind_address(), "0.0.0.0:9090");

        config.apply_port_override(None).unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = AppConfig::default();
        let err = config.apply_port_override(Some("eighty")).unwrap_err();
        assert!(err.to_string().contains("PORT must be a port number"));
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_radius_range() {
        let mut config = AppConfig::default();
        config.search.radius_meters = 50_000;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Search radius"));
    }

    #[rstest]
    #[case(20, 5, true)]
    #[case(21, 5, false)]
    #[case(0, 5, false)]
    #[case(10, 21, false)]
    #[case(10, 20, true)]
    fn test_config_validation_page_limits(
        #[case] geo_limit: u32,
        #[case] text_limit: u32,
        #[case] valid: bool,
    ) {
        let mut config = AppConfig::default();
        config.search.geo_limit = geo_limit;
        config.search.text_limit = text_limit;
        assert_eq!(config.validate().is_ok(), valid);
    }

    #[test]
    fn test_config_validation_base_url() {
        let mut config = AppConfig::default();
        config.search.base_url = "ftp://en.wikipedia.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "travelmonth-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[search]\nradius_meters = 5000\ngeo_limit = 15\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = AppConfig::load_from_path(&path, Some("3000")).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.search.radius_meters, 5000);
        assert_eq!(config.search.geo_limit, 15);
        assert_eq!(config.search.text_limit, 5);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/travelmonth.toml");
        let config = AppConfig::load_from_path(&path, None).unwrap();
        assert_eq!(config.search.radius_meters, 10_000);
    }
}
