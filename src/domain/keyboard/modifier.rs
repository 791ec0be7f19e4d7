//! Modifier keys and modifier sets

use std::fmt;

use super::keys::{VirtualKey, VK_CONTROL, VK_MENU, VK_SHIFT};

/// A modifier that may be held while a character key is tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Shift,
    Control,
    /// Alt, or the Alt half of AltGr
    Alt,
}

impl Modifier {
    /// Acquisition order. Release happens in reverse.
    pub const PRESS_ORDER: [Modifier; 3] = [Modifier::Shift, Modifier::Control, Modifier::Alt];

    /// Virtual key used to press this modifier
    pub const fn virtual_key(self) -> VirtualKey {
        match self {
            Self::Shift => VK_SHIFT,
            Self::Control => VK_CONTROL,
            Self::Alt => VK_MENU,
        }
    }

    /// Bit of the layout shift-state byte that requests this modifier
    const fn shift_state_bit(self) -> u8 {
        match self {
            Self::Shift => 0x01,
            Self::Control => 0x02,
            Self::Alt => 0x04,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Control => "ctrl",
            Self::Alt => "alt",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set of modifiers required to produce a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierSet {
    bits: u8,
}

impl ModifierSet {
    /// No modifiers
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Decode the high byte of a `VkKeyScanEx` result.
    ///
    /// Bits other than Shift (0x01), Control (0x02) and Alt (0x04) are
    /// ignored. AltGr characters report Control and Alt together.
    pub const fn from_shift_state(state: u8) -> Self {
        Self { bits: state & 0x07 }
    }

    /// Build a set from individual modifiers
    pub fn from_modifiers(modifiers: &[Modifier]) -> Self {
        modifiers
            .iter()
            .fold(Self::empty(), |set, m| set.with(*m))
    }

    /// Return a copy of this set with `modifier` added
    pub const fn with(self, modifier: Modifier) -> Self {
        Self {
            bits: self.bits | modifier.shift_state_bit(),
        }
    }

    pub const fn contains(&self, modifier: Modifier) -> bool {
        self.bits & modifier.shift_state_bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Modifiers in this set, in press order (Shift, Control, Alt)
    pub fn press_order(&self) -> impl Iterator<Item = Modifier> + '_ {
        Modifier::PRESS_ORDER
            .into_iter()
            .filter(move |m| self.contains(*m))
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.press_order().map(|m| m.as_str()).collect();
        write!(f, "{}", names.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_shift_only() {
        let set = ModifierSet::from_shift_state(0x01);
        assert!(set.contains(Modifier::Shift));
        assert!(!set.contains(Modifier::Control));
        assert!(!set.contains(Modifier::Alt));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn decode_altgr_sets_control_and_alt() {
        let set = ModifierSet::from_shift_state(0x06);
        assert!(!set.contains(Modifier::Shift));
        assert!(set.contains(Modifier::Control));
        assert!(set.contains(Modifier::Alt));
    }

    #[test]
    fn decode_ignores_unknown_bits() {
        // 0x08 is the Hankaku bit on Japanese layouts
        let set = ModifierSet::from_shift_state(0x09);
        assert_eq!(set, ModifierSet::from_modifiers(&[Modifier::Shift]));
    }

    #[test]
    fn press_order_is_shift_control_alt() {
        let set = ModifierSet::from_shift_state(0x07);
        let order: Vec<Modifier> = set.press_order().collect();
        assert_eq!(order, vec![Modifier::Shift, Modifier::Control, Modifier::Alt]);
    }

    #[test]
    fn empty_set() {
        let set = ModifierSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.press_order().count(), 0);
        assert_eq!(set.to_string(), "none");
    }

    #[test]
    fn display_joins_in_press_order() {
        let set = ModifierSet::from_modifiers(&[Modifier::Alt, Modifier::Shift]);
        assert_eq!(set.to_string(), "shift+alt");
    }

    #[test]
    fn modifier_virtual_keys() {
        assert_eq!(Modifier::Shift.virtual_key(), VirtualKey(0x10));
        assert_eq!(Modifier::Control.virtual_key(), VirtualKey(0x11));
        assert_eq!(Modifier::Alt.virtual_key(), VirtualKey(0x12));
    }
}
