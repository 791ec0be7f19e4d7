//! Keyboard domain module

mod event;
mod keys;
mod modifier;

pub use event::{Direction, KeyEvent};
pub use keys::{
    decode_key_scan, LayoutHandle, ScanCode, VirtualKey, ENTER_SCAN_FALLBACK, VK_CONTROL, VK_MENU,
    VK_RETURN, VK_SHIFT,
};
pub use modifier::{Modifier, ModifierSet};
