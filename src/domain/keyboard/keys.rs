//! Key identity value objects

use std::fmt;

/// Virtual-key code for Shift
pub const VK_SHIFT: VirtualKey = VirtualKey(0x10);

/// Virtual-key code for Control
pub const VK_CONTROL: VirtualKey = VirtualKey(0x11);

/// Virtual-key code for Alt (VK_MENU)
pub const VK_MENU: VirtualKey = VirtualKey(0x12);

/// Virtual-key code for Enter
pub const VK_RETURN: VirtualKey = VirtualKey(0x0D);

/// Scan code of the Enter key on a PC keyboard, used when the layout
/// cannot resolve VK_RETURN.
pub const ENTER_SCAN_FALLBACK: ScanCode = ScanCode(0x1C);

/// Opaque handle to an OS keyboard layout (an HKL on Windows).
///
/// The OS owns the layout; the handle is only valid as a token to pass
/// back into the same layout table that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutHandle(pub usize);

impl fmt::Display for LayoutHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Layout-independent logical key (a Windows virtual-key code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VirtualKey(pub u16);

impl VirtualKey {
    /// Whether the key lives in the navigation/editing block and needs the
    /// extended flag when sent by scan code.
    pub const fn is_extended(self) -> bool {
        matches!(
            self.0,
            // PageUp, PageDown, End, Home, Left, Up, Right, Down
            0x21..=0x28
            // Insert, Delete
            | 0x2D | 0x2E
        )
    }
}

/// Split a `VkKeyScanEx` result into virtual key and shift-state byte.
///
/// The low byte is the virtual key, the high byte the shift state. -1 means
/// the layout has no key for the character.
pub fn decode_key_scan(raw: i16) -> Option<(VirtualKey, u8)> {
    if raw == -1 {
        return None;
    }
    let [low, high] = raw.to_le_bytes();
    Some((VirtualKey(u16::from(low)), high))
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VK 0x{:02X}", self.0)
    }
}

/// Hardware key position (PC set-1 scan code). Zero never names a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScanCode(pub u16);

impl ScanCode {
    /// Wrap a raw OS value, mapping the "no key" sentinel to `None`.
    pub const fn new(raw: u16) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }
}

impl fmt::Display for ScanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SC 0x{:02X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_are_extended() {
        for vk in [0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x2D, 0x2E] {
            assert!(VirtualKey(vk).is_extended(), "0x{:02X}", vk);
        }
    }

    #[test]
    fn character_keys_are_not_extended() {
        assert!(!VirtualKey(0x41).is_extended());
        assert!(!VirtualKey(0x20).is_extended());
        assert!(!VirtualKey(0x29).is_extended());
        assert!(!VirtualKey(0x2C).is_extended());
        assert!(!VK_RETURN.is_extended());
    }

    #[test]
    fn key_scan_splits_key_and_shift_state() {
        // 'A' on US: VK_A with Shift
        assert_eq!(decode_key_scan(0x0141), Some((VirtualKey(0x41), 0x01)));
        // AltGr+A: Control and Alt
        assert_eq!(decode_key_scan(0x0641), Some((VirtualKey(0x41), 0x06)));
        assert_eq!(decode_key_scan(0x0231), Some((VirtualKey(0x31), 0x02)));
        assert_eq!(decode_key_scan(0x0020), Some((VirtualKey(0x20), 0x00)));
    }

    #[test]
    fn key_scan_minus_one_is_no_key() {
        assert_eq!(decode_key_scan(-1), None);
    }

    #[test]
    fn zero_scan_code_is_none() {
        assert_eq!(ScanCode::new(0), None);
        assert_eq!(ScanCode::new(0x1E), Some(ScanCode(0x1E)));
    }

    #[test]
    fn display_formats() {
        assert_eq!(VirtualKey(0x41).to_string(), "VK 0x41");
        assert_eq!(ScanCode(0x1C).to_string(), "SC 0x1C");
        assert_eq!(LayoutHandle(0x0409).to_string(), "0x00000409");
    }
}
