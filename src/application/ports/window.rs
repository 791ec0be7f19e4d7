//! Window directory port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::window::{WindowId, WindowInfo};

/// Window directory errors
#[derive(Debug, Clone, Error)]
pub enum WindowError {
    #[error("Window listing is not supported on this platform")]
    Unsupported,

    #[error("Failed to enumerate windows: {0}")]
    EnumerationFailed(String),
}

/// Port for finding and focusing top-level windows
#[async_trait]
pub trait WindowDirectory: Send + Sync {
    /// List visible windows that have a title, sorted by title.
    async fn enumerate(&self) -> Result<Vec<WindowInfo>, WindowError>;

    /// Ask the OS to bring a window to the foreground.
    ///
    /// # Returns
    /// true if the OS accepted the request
    async fn bring_to_foreground(&self, id: WindowId) -> bool;

    /// The window that currently has focus, if it has a title.
    async fn current_active(&self) -> Option<WindowInfo>;
}
