//! Layout table for platforms whose keymap we cannot read
//!
//! Without the OS layout there is no way to know which physical key makes a
//! character, so this table knows none. Every character then goes through
//! text input, which the OS types under whatever layout is active. Enter
//! keeps its fixed scan code.

use crate::application::ports::LayoutTable;
use crate::domain::keyboard::{LayoutHandle, ScanCode, VirtualKey};

/// Stands for "the layout the OS has active", whatever it is
pub const SYSTEM_LAYOUT: LayoutHandle = LayoutHandle(0);

/// Layout table that maps no characters to keys
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableLayoutTable;

impl PortableLayoutTable {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutTable for PortableLayoutTable {
    fn active(&self) -> LayoutHandle {
        SYSTEM_LAYOUT
    }

    // Text input comes out the same under every layout, so any request is met
    fn load(&self, _klid: &str) -> Option<LayoutHandle> {
        Some(SYSTEM_LAYOUT)
    }

    fn key_scan(&self, _unit: u16, _layout: LayoutHandle) -> Option<(VirtualKey, u8)> {
        None
    }

    fn scan_code(&self, _key: VirtualKey, _layout: LayoutHandle) -> Option<ScanCode> {
        None
    }
}
