//! Clipboard infrastructure module
//!
//! Reads text with arboard on every platform.

mod arboard;

pub use arboard::ArboardClipboard;

use crate::application::ports::ClipboardSource;

/// Create the default clipboard source for the current platform
pub fn create_clipboard() -> Box<dyn ClipboardSource> {
    Box::new(ArboardClipboard::new())
}
