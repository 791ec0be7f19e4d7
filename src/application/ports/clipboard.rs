//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),
}

/// Port for reading text from the clipboard
#[async_trait]
pub trait ClipboardSource: Send + Sync {
    /// Read the current clipboard text.
    async fn read_text(&self) -> Result<String, ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl ClipboardSource for Box<dyn ClipboardSource> {
    async fn read_text(&self) -> Result<String, ClipboardError> {
        self.as_ref().read_text().await
    }
}
