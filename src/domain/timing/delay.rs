//! Delay value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DelayParseError;

/// Default pause after each typed character (7 milliseconds)
pub const DEFAULT_CHAR_DELAY_MS: u64 = 7;

/// Default pause between focusing the target and typing (150 milliseconds)
pub const DEFAULT_FOCUS_DELAY_MS: u64 = 150;

/// Default active-window poll interval (300 milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 300;

/// Value object representing a pause.
/// Immutable, millisecond resolution, zero allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delay {
    milliseconds: u64,
}

impl Delay {
    /// No pause at all
    pub const ZERO: Self = Self::from_millis(0);

    /// Create a Delay from milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    /// Create a Delay from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    /// Default per-character delay
    pub const fn default_char_delay() -> Self {
        Self::from_millis(DEFAULT_CHAR_DELAY_MS)
    }

    /// Default focus delay
    pub const fn default_focus_delay() -> Self {
        Self::from_millis(DEFAULT_FOCUS_DELAY_MS)
    }

    /// Default tracker poll interval
    pub const fn default_poll_interval() -> Self {
        Self::from_millis(DEFAULT_POLL_INTERVAL_MS)
    }

    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    pub const fn is_zero(&self) -> bool {
        self.milliseconds == 0
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl FromStr for Delay {
    type Err = DelayParseError;

    /// Parse a delay string.
    /// Supported formats: "0", "7ms", "2s", "1m", "1m30s", "1s500ms"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let err = || DelayParseError {
            input: s.to_string(),
        };

        if input == "0" {
            return Ok(Self::ZERO);
        }

        let mut total_ms: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }
            if current_num.is_empty() {
                return Err(err());
            }
            let value: u64 = current_num.parse().map_err(|_| err())?;
            let factor = match ch {
                'm' if chars.peek() == Some(&'s') => {
                    chars.next();
                    1
                }
                'm' => 60_000,
                's' => 1000,
                _ => return Err(err()),
            };
            total_ms = value
                .checked_mul(factor)
                .and_then(|v| total_ms.checked_add(v))
                .ok_or_else(err)?;
            current_num.clear();
            found_any = true;
        }

        // Leftover digits without a unit
        if !current_num.is_empty() || !found_any {
            return Err(err());
        }

        Ok(Self::from_millis(total_ms))
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.milliseconds % 1000 != 0 || self.milliseconds == 0 {
            return write!(f, "{}ms", self.milliseconds);
        }

        let total_secs = self.milliseconds / 1000;
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes == 0 {
            write!(f, "{}s", seconds)
        } else if seconds == 0 {
            write!(f, "{}m", minutes)
        } else {
            write!(f, "{}m{}s", minutes, seconds)
        }
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::default_char_delay()
    }
}
