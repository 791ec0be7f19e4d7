//! Keyboard layout catalog value object

use std::fmt;

/// Display name of the "use whatever the system has active" choice
pub const AUTO_LAYOUT_NAME: &str = "Auto (Use System)";

/// KLID of the US English layout
pub const KLID_EN_US: &str = "00000409";

/// A named keyboard layout and the KLID the OS loads it by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    pub name: &'static str,
    pub klid: &'static str,
}

const fn entry(name: &'static str, klid: &'static str) -> LayoutEntry {
    LayoutEntry { name, klid }
}

/// All selectable layouts, in menu order.
pub static LAYOUTS: &[LayoutEntry] = &[
    entry("English (US)", KLID_EN_US),
    entry("US International", "00020409"),
    entry("English (UK)", "00000809"),
    entry("German (DE)", "00000407"),
    entry("French (FR)", "0000040C"),
    entry("Spanish (ES)", "0000040A"),
    entry("Italian (IT)", "00000410"),
    entry("Dutch (NL)", "00000413"),
    entry("Portuguese (BR - ABNT2)", "00010416"),
    entry("Portuguese (PT)", "00000816"),
    entry("Danish (DA)", "00000406"),
    entry("Swedish (SV)", "0000041D"),
    entry("Finnish (FI)", "0000040B"),
    entry("Norwegian (NO)", "00000414"),
    entry("Swiss German (DE-CH)", "00000807"),
    entry("Swiss French (FR-CH)", "0000100C"),
    entry("Polish (Programmers)", "00000415"),
    entry("Czech (CS)", "00000405"),
    entry("Slovak (SK)", "0000041B"),
    entry("Hungarian (HU)", "0000040E"),
    entry("Turkish (Q)", "0000041F"),
    entry("Russian (RU)", "00000419"),
    entry("Ukrainian (UK)", "00000422"),
    entry("Hebrew (HE)", "0000040D"),
    entry("Arabic (AR)", "00000401"),
    entry("Japanese (JP)", "00000411"),
    entry("Korean (KO)", "00000412"),
];

/// What a layout name asks the layout table for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutRequest {
    /// The layout currently active on the system
    System,
    /// A specific layout by KLID
    Klid(&'static str),
}

impl LayoutRequest {
    /// Map a human-readable layout name onto a request.
    ///
    /// Never fails: empty, "Auto" and unknown names all select the system
    /// layout. Known names match exactly, case-insensitively, or by KLID.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("auto")
            || trimmed.eq_ignore_ascii_case(AUTO_LAYOUT_NAME)
        {
            return Self::System;
        }

        find_layout(trimmed)
            .map(|e| Self::Klid(e.klid))
            .unwrap_or(Self::System)
    }
}

impl fmt::Display for LayoutRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system layout"),
            Self::Klid(klid) => write!(f, "KLID {}", klid),
        }
    }
}

/// Look up a catalog entry by name or KLID
pub fn find_layout(name: &str) -> Option<&'static LayoutEntry> {
    LAYOUTS
        .iter()
        .find(|e| e.name == name)
        .or_else(|| {
            LAYOUTS
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(name) || e.klid.eq_ignore_ascii_case(name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_all_layouts() {
        assert_eq!(LAYOUTS.len(), 27);
    }

    #[test]
    fn klids_are_eight_hex_digits() {
        for layout in LAYOUTS {
            assert_eq!(layout.klid.len(), 8, "{}", layout.name);
            assert!(
                layout.klid.chars().all(|c| c.is_ascii_hexdigit()),
                "{}",
                layout.name
            );
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in LAYOUTS.iter().enumerate() {
            for b in &LAYOUTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn known_name_resolves_to_klid() {
        assert_eq!(
            LayoutRequest::from_name("German (DE)"),
            LayoutRequest::Klid("00000407")
        );
        assert_eq!(
            LayoutRequest::from_name("Portuguese (BR - ABNT2)"),
            LayoutRequest::Klid("00010416")
        );
    }

    #[test]
    fn name_match_is_case_insensitive_and_trimmed() {
        assert_eq!(
            LayoutRequest::from_name("  english (us) "),
            LayoutRequest::Klid(KLID_EN_US)
        );
    }

    #[test]
    fn klid_is_accepted_as_name() {
        assert_eq!(
            LayoutRequest::from_name("0000040c"),
            LayoutRequest::Klid("0000040C")
        );
    }

    #[test]
    fn auto_and_empty_select_system() {
        for name in ["", "   ", "Auto", AUTO_LAYOUT_NAME] {
            assert_eq!(LayoutRequest::from_name(name), LayoutRequest::System, "{:?}", name);
        }
    }

    #[test]
    fn unknown_name_selects_system() {
        assert_eq!(LayoutRequest::from_name("Klingon (KL)"), LayoutRequest::System);
    }
}
