//! Window infrastructure module
//!
//! Provides window listing and focusing via user32 on Windows and a no-op
//! directory elsewhere.

mod noop;
#[cfg(windows)]
mod win32;

use std::sync::Arc;

pub use noop::NoOpWindowDirectory;
#[cfg(windows)]
pub use win32::Win32WindowDirectory;

use crate::application::ports::WindowDirectory;
use crate::domain::window::WindowId;

/// Create the window directory for the current platform
pub fn create_window_directory() -> Arc<dyn WindowDirectory> {
    #[cfg(windows)]
    {
        Arc::new(Win32WindowDirectory::new())
    }

    #[cfg(not(windows))]
    {
        Arc::new(NoOpWindowDirectory::new())
    }
}

/// Our own console window, which the active-window tracker must skip
pub fn own_window() -> Option<WindowId> {
    #[cfg(windows)]
    {
        win32::own_console_window()
    }

    #[cfg(not(windows))]
    {
        None
    }
}
