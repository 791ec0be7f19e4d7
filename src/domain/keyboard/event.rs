//! Low-level keyboard events handed to an input sink

use super::keys::{ScanCode, VirtualKey};

/// Key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
}

/// One event on the OS input stream, as if from a physical keyboard.
///
/// Timestamps are left to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Key addressed by virtual-key code (used for modifiers)
    Virtual { key: VirtualKey, direction: Direction },
    /// Key addressed by hardware position
    Scan {
        code: ScanCode,
        extended: bool,
        direction: Direction,
    },
    /// A UTF-16 code unit delivered directly as text
    Unicode { unit: u16, direction: Direction },
}

impl KeyEvent {
    pub const fn virtual_key(key: VirtualKey, direction: Direction) -> Self {
        Self::Virtual { key, direction }
    }

    pub const fn scan(code: ScanCode, extended: bool, direction: Direction) -> Self {
        Self::Scan {
            code,
            extended,
            direction,
        }
    }

    pub const fn unicode(unit: u16, direction: Direction) -> Self {
        Self::Unicode { unit, direction }
    }

    pub const fn direction(&self) -> Direction {
        match self {
            Self::Virtual { direction, .. }
            | Self::Scan { direction, .. }
            | Self::Unicode { direction, .. } => *direction,
        }
    }
}
