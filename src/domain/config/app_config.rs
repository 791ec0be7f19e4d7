//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::layout::AUTO_LAYOUT_NAME;
use crate::domain::timing::Delay;

/// Default input backend preference
pub const DEFAULT_BACKEND: &str = "auto";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Keyboard layout name (see `ghost-type layouts`)
    pub layout: Option<String>,
    /// Pause after each character
    pub delay: Option<String>,
    /// Pause between focusing the target and typing
    pub focus_delay: Option<String>,
    /// Wait before typing while tracking the last active window
    pub countdown: Option<String>,
    /// Active-window poll interval during the countdown
    pub poll_interval: Option<String>,
    /// Input backend: auto, native, enigo
    pub backend: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            layout: Some(AUTO_LAYOUT_NAME.to_string()),
            delay: Some(Delay::default_char_delay().to_string()),
            focus_delay: Some(Delay::default_focus_delay().to_string()),
            countdown: Some(Delay::ZERO.to_string()),
            poll_interval: Some(Delay::default_poll_interval().to_string()),
            backend: Some(DEFAULT_BACKEND.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            layout: other.layout.or(self.layout),
            delay: other.delay.or(self.delay),
            focus_delay: other.focus_delay.or(self.focus_delay),
            countdown: other.countdown.or(self.countdown),
            poll_interval: other.poll_interval.or(self.poll_interval),
            backend: other.backend.or(self.backend),
        }
    }

    /// Layout name, or the "Auto" choice if not set
    pub fn layout_or_default(&self) -> &str {
        self.layout.as_deref().unwrap_or(AUTO_LAYOUT_NAME)
    }

    /// Per-character delay, or default if not set/invalid
    pub fn delay_or_default(&self) -> Delay {
        parse_delay(self.delay.as_deref()).unwrap_or_else(Delay::default_char_delay)
    }

    /// Focus delay, or default if not set/invalid
    pub fn focus_delay_or_default(&self) -> Delay {
        parse_delay(self.focus_delay.as_deref()).unwrap_or_else(Delay::default_focus_delay)
    }

    /// Countdown, or zero if not set/invalid
    pub fn countdown_or_default(&self) -> Delay {
        parse_delay(self.countdown.as_deref()).unwrap_or(Delay::ZERO)
    }

    /// Poll interval, or default if not set/invalid/zero
    pub fn poll_interval_or_default(&self) -> Delay {
        parse_delay(self.poll_interval.as_deref())
            .filter(|d| !d.is_zero())
            .unwrap_or_else(Delay::default_poll_interval)
    }

    /// Backend preference string, or "auto" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or(DEFAULT_BACKEND)
    }
}

fn parse_delay(value: Option<&str>) -> Option<Delay> {
    value.and_then(|s| s.parse().ok())
}
