//! XDG config store adapter
//!
//! Reads `config.toml` from the user config directory. The file is written
//! by the user; this store never creates or modifies it.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::timing::Delay;
use crate::infrastructure::keyboard::BackendPreference;

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("ghost-type");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Reject values that would otherwise be silently replaced by defaults
    fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        let delays = [
            ("delay", &config.delay),
            ("focus_delay", &config.focus_delay),
            ("countdown", &config.countdown),
            ("poll_interval", &config.poll_interval),
        ];
        for (key, value) in delays {
            if let Some(value) = value {
                value
                    .parse::<Delay>()
                    .map_err(|e| ConfigError::ValidationError {
                        key: key.to_string(),
                        message: e.to_string(),
                    })?;
            }
        }

        if let Some(backend) = &config.backend {
            backend
                .parse::<BackendPreference>()
                .map_err(|e| ConfigError::ValidationError {
                    key: "backend".to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(())
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("ghost-type"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_flat_format() {
        let content = r#"
layout = "German (DE)"
delay = "15ms"
countdown = "3s"
backend = "enigo"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.layout, Some("German (DE)".to_string()));
        assert_eq!(config.delay, Some("15ms".to_string()));
        assert_eq!(config.countdown, Some("3s".to_string()));
        assert_eq!(config.backend, Some("enigo".to_string()));
        assert_eq!(config.focus_delay, None);
    }

    #[test]
    fn invalid_delay_names_the_key() {
        let err = XdgConfigStore::parse_toml("focus_delay = \"soon\"").unwrap_err();
        match err {
            ConfigError::ValidationError { key, .. } => assert_eq!(key, "focus_delay"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_backend_is_rejected() {
        let err = XdgConfigStore::parse_toml("backend = \"xdotool\"").unwrap_err();
        assert!(err.to_string().contains("backend"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = XdgConfigStore::parse_toml("layout = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        assert!(!store.exists());
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
        // Loading never creates the file
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "layout = \"French (FR)\"\ndelay = \"0\"").unwrap();
        let store = XdgConfigStore::with_path(file.path());

        let config = store.load().await.unwrap();
        assert_eq!(config.layout_or_default(), "French (FR)");
        assert!(config.delay_or_default().is_zero());
    }
}
