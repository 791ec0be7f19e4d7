//! No-op window directory

use async_trait::async_trait;

use crate::application::ports::{WindowDirectory, WindowError};
use crate::domain::window::{WindowId, WindowInfo};

/// Window directory for platforms without window control
///
/// Listing fails, focusing is refused and no window is ever active, so text
/// always goes to whatever has focus.
pub struct NoOpWindowDirectory;

impl NoOpWindowDirectory {
    /// Create a new no-op window directory
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpWindowDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WindowDirectory for NoOpWindowDirectory {
    async fn enumerate(&self) -> Result<Vec<WindowInfo>, WindowError> {
        Err(WindowError::Unsupported)
    }

    async fn bring_to_foreground(&self, _id: WindowId) -> bool {
        false
    }

    async fn current_active(&self) -> Option<WindowInfo> {
        None
    }
}
