//! Main app runner for typing text

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use tokio::io::AsyncReadExt;

use crate::application::ports::{ClipboardSource, ConfigStore};
use crate::application::{
    ActiveWindowTracker, LastActiveWindow, TargetSelector, TypeInput, TypeTextUseCase,
};
use crate::domain::config::AppConfig;
use crate::domain::timing::Delay;
use crate::infrastructure::{
    create_clipboard, create_window_directory, own_window, select_backend, BackendPreference,
    BlockingTyper, XdgConfigStore,
};

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variables read into the config
pub const ENV_LAYOUT: &str = "GHOST_TYPE_LAYOUT";
pub const ENV_DELAY: &str = "GHOST_TYPE_DELAY";

/// Where the text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Arg(String),
    Stdin,
    Clipboard,
}

impl TextSource {
    /// Pick the source from the command line
    pub fn from_cli(text: Option<&str>, clipboard: bool) -> Self {
        match text {
            _ if clipboard => TextSource::Clipboard,
            Some("-") | None => TextSource::Stdin,
            Some(text) => TextSource::Arg(text.to_string()),
        }
    }

    async fn read(self) -> Result<String, String> {
        match self {
            TextSource::Arg(text) => Ok(text),
            TextSource::Stdin => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .map_err(|e| format!("Failed to read standard input: {}", e))?;
                Ok(text)
            }
            TextSource::Clipboard => create_clipboard()
                .read_text()
                .await
                .map_err(|e| e.to_string()),
        }
    }
}

/// Parsed typing options
#[derive(Debug, Clone)]
pub struct TypeOptions {
    pub source: TextSource,
    pub layout: String,
    pub delay: Delay,
    pub focus_delay: Delay,
    pub countdown: Delay,
    pub poll_interval: Delay,
    pub backend: BackendPreference,
    pub window: Option<String>,
}

impl TypeOptions {
    /// Validate the merged configuration.
    ///
    /// # Returns
    /// A message naming the bad value on failure
    pub fn from_config(cli: &Cli, config: &AppConfig) -> Result<Self, String> {
        fn delay(key: &str, value: Option<&str>, default: Delay) -> Result<Delay, String> {
            match value {
                Some(s) => s
                    .parse::<Delay>()
                    .map_err(|e| format!("Invalid {}: {}", key, e)),
                None => Ok(default),
            }
        }

        Ok(Self {
            source: TextSource::from_cli(cli.text.as_deref(), cli.clipboard),
            layout: config.layout_or_default().to_string(),
            delay: delay("delay", config.delay.as_deref(), Delay::default_char_delay())?,
            focus_delay: delay(
                "focus-delay",
                config.focus_delay.as_deref(),
                Delay::default_focus_delay(),
            )?,
            countdown: delay("countdown", config.countdown.as_deref(), Delay::ZERO)?,
            poll_interval: config.poll_interval_or_default(),
            backend: config
                .backend_or_default()
                .parse::<BackendPreference>()
                .map_err(|e| format!("Invalid backend: {}", e))?,
            window: cli.window.clone(),
        })
    }
}

/// Type text into the target window
pub async fn run_type(options: TypeOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let text = match options.source.clone().read().await {
        Ok(text) => text,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if text.is_empty() {
        presenter.info("Nothing to type.");
        return ExitCode::from(EXIT_SUCCESS);
    }

    let backend = match select_backend(options.backend) {
        Ok(backend) => backend,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let typer = BlockingTyper::new(backend);
    log::debug!("Using {} backend", typer.backend());

    let directory = create_window_directory();
    let last_active = LastActiveWindow::new();

    let target = match options.window {
        Some(query) => TargetSelector::Explicit(query),
        None if !options.countdown.is_zero() => {
            run_countdown(&mut presenter, &options, &last_active).await;
            // Without window tracking the user switches focus by hand
            if cfg!(windows) {
                TargetSelector::LastActive
            } else {
                TargetSelector::Focused
            }
        }
        None => TargetSelector::Focused,
    };

    let use_case = TypeTextUseCase::new(directory, typer, last_active);
    let input = TypeInput {
        text,
        layout: options.layout,
        delay: options.delay,
        focus_delay: options.focus_delay,
        target,
    };

    let typing = presenter.format_typing(input.text.chars().count(), &input.layout);
    presenter.start_spinner(&typing);

    match use_case.execute(input).await {
        Ok(output) => {
            presenter.spinner_success(&format!(
                "Typed {} characters to: {}",
                output.report.characters,
                output.target_label()
            ));
            log::debug!("Dispatch finished: {}", output.report);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail(&format!("Error typing: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Wait out the countdown while tracking the last active window
async fn run_countdown(
    presenter: &mut Presenter,
    options: &TypeOptions,
    last_active: &LastActiveWindow,
) {
    let tracker =
        ActiveWindowTracker::new(create_window_directory(), last_active.clone(), own_window())
            .spawn(options.poll_interval);

    let started = Instant::now();
    let total = options.countdown.as_std();
    let line = presenter.format_countdown(options.countdown, None);
    presenter.start_spinner(&line);

    while let Some(remaining) = total.checked_sub(started.elapsed()).filter(|d| !d.is_zero()) {
        let remaining_ms = u64::try_from(remaining.as_millis()).unwrap_or(u64::MAX);
        let title = last_active.get().map(|w| w.title);
        presenter.update_spinner(
            &presenter.format_countdown(Delay::from_millis(remaining_ms), title.as_deref()),
        );
        tokio::time::sleep(remaining.min(std::time::Duration::from_millis(250))).await;
    }

    tracker.abort();
    presenter.stop_spinner();
}

/// Configuration values taken from the environment
pub fn env_config() -> AppConfig {
    AppConfig {
        layout: env::var(ENV_LAYOUT).ok().filter(|s| !s.is_empty()),
        delay: env::var(ENV_DELAY).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> Result<AppConfig, String> {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.map_err(|e| e.to_string())?;

    // Merge: defaults < file < env < cli
    Ok(AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config))
}
