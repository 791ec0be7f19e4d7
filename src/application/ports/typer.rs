//! Text typer port interface

use async_trait::async_trait;

use crate::application::dispatcher::{DispatchError, DispatchReport};
use crate::domain::timing::Delay;

/// One "type this text" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRequest {
    pub text: String,
    pub layout: String,
    pub delay: Delay,
}

/// Port for typing text into the focused window
#[async_trait]
pub trait TextTyper: Send + Sync {
    /// Type text as keystrokes. Runs to completion or the first failure.
    async fn type_text(&self, request: TypeRequest) -> Result<DispatchReport, DispatchError>;
}
