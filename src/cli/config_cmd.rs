//! Config command handler
//!
//! Configuration is read-only: these commands show where the file lives and
//! what values are in effect, never write it.

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

use super::app::env_config;
use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

/// The layers a value can come from, lowest precedence first
struct Layers {
    file: AppConfig,
    env: AppConfig,
}

impl Layers {
    async fn load<S: ConfigStore>(store: &S) -> Result<Self, ConfigError> {
        Ok(Self {
            file: store.load().await?,
            env: env_config(),
        })
    }

    /// Effective value and where it came from
    fn lookup(&self, key: &str) -> (String, &'static str) {
        let defaults = AppConfig::defaults();
        let candidates = [(&self.env, "env"), (&self.file, "file"), (&defaults, "default")];
        candidates
            .iter()
            .find_map(|(config, source)| field(config, key).map(|v| (v.to_string(), *source)))
            .unwrap_or_else(|| ("(not set)".to_string(), "default"))
    }
}

fn field<'a>(config: &'a AppConfig, key: &str) -> Option<&'a str> {
    match key {
        "layout" => config.layout.as_deref(),
        "delay" => config.delay.as_deref(),
        "focus_delay" => config.focus_delay.as_deref(),
        "countdown" => config.countdown.as_deref(),
        "poll_interval" => config.poll_interval.as_deref(),
        "backend" => config.backend.as_deref(),
        _ => None,
    }
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let layers = Layers::load(store).await?;
    let (value, _) = layers.lookup(key);
    presenter.output(&value);
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let layers = Layers::load(store).await?;

    for key in VALID_CONFIG_KEYS {
        let (value, source) = layers.lookup(key);
        presenter.key_value(key, &format!("{} ({})", value, source));
    }

    if !store.exists() {
        presenter.info(&format!(
            "No config file at {}; showing defaults",
            store.path().display()
        ));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layers(file: AppConfig, env: AppConfig) -> Layers {
        Layers { file, env }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(check_key("delay").is_ok());
        let err = check_key("api_key").unwrap_err();
        assert!(err.to_string().contains("Valid keys"));
    }

    #[test]
    fn lookup_prefers_env_over_file() {
        let l = layers(
            AppConfig {
                layout: Some("French (FR)".to_string()),
                ..Default::default()
            },
            AppConfig {
                layout: Some("German (DE)".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(l.lookup("layout"), ("German (DE)".to_string(), "env"));
    }

    #[test]
    fn lookup_prefers_file_over_defaults() {
        let l = layers(
            AppConfig {
                delay: Some("20ms".to_string()),
                ..Default::default()
            },
            AppConfig::empty(),
        );
        assert_eq!(l.lookup("delay"), ("20ms".to_string(), "file"));
    }

    #[test]
    fn lookup_falls_back_to_defaults() {
        let l = layers(AppConfig::empty(), AppConfig::empty());
        assert_eq!(l.lookup("focus_delay"), ("150ms".to_string(), "default"));
        assert_eq!(l.lookup("backend"), ("auto".to_string(), "default"));
    }
}
