//! Character to keystroke translation

use std::fmt;

use crate::application::ports::LayoutTable;
use crate::domain::keyboard::{LayoutHandle, ModifierSet, ScanCode, VirtualKey};

/// A physical key plus the modifiers that make it produce a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    pub key: VirtualKey,
    pub scan: ScanCode,
    pub extended: bool,
    pub modifiers: ModifierSet,
}

impl fmt::Display for KeyStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) with {}", self.key, self.scan, self.modifiers)
    }
}

/// Why a character has no physical key. Recovered by Unicode injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Untranslatable {
    /// Outside the basic multilingual plane
    Astral,
    /// The layout has no key producing it
    NoMapping,
    /// The key exists but has no scan code
    NoScanCode(VirtualKey),
}

impl fmt::Display for Untranslatable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Astral => write!(f, "outside the basic plane"),
            Self::NoMapping => write!(f, "no key in layout"),
            Self::NoScanCode(vk) => write!(f, "{} has no scan code", vk),
        }
    }
}

/// Find the key and modifiers that type `ch` under `layout`.
pub fn translate<T: LayoutTable + ?Sized>(
    table: &T,
    ch: char,
    layout: LayoutHandle,
) -> Result<KeyStroke, Untranslatable> {
    // Astral characters never reach the layout table
    let unit = u16::try_from(u32::from(ch)).map_err(|_| Untranslatable::Astral)?;

    let (key, shift_state) = table
        .key_scan(unit, layout)
        .ok_or(Untranslatable::NoMapping)?;
    let scan = table
        .scan_code(key, layout)
        .ok_or(Untranslatable::NoScanCode(key))?;

    Ok(KeyStroke {
        key,
        scan,
        extended: key.is_extended(),
        modifiers: ModifierSet::from_shift_state(shift_state),
    })
}
