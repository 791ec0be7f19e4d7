//! Target window value objects

use std::fmt;

/// Longest window title kept, in code points
pub const MAX_TITLE_CHARS: usize = 255;

/// Opaque window identifier (an HWND on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

impl WindowId {
    /// Parse "0x1A2B" or a plain decimal id
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).ok()?,
            None => s.parse().ok()?,
        };
        (value != 0).then_some(Self(value))
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// A top-level window the user may target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub id: WindowId,
    pub title: String,
}

impl WindowInfo {
    /// Create a window entry, normalising the title
    pub fn new(id: WindowId, title: &str) -> Self {
        Self {
            id,
            title: truncate_title(title, MAX_TITLE_CHARS),
        }
    }

    /// Menu label: "<title> (0x…)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.id)
    }
}

/// Trim a title and cut it to at most `max` code points
pub fn truncate_title(title: &str, max: usize) -> String {
    title.trim().chars().take(max).collect()
}

/// Sort windows by title, case-insensitively
pub fn sort_by_title(windows: &mut [WindowInfo]) {
    windows.sort_by_cached_key(|w| w.title.to_lowercase());
}
