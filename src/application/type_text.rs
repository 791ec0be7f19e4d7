//! Type text use case

use std::sync::Arc;

use thiserror::Error;

use crate::domain::timing::Delay;
use crate::domain::window::{WindowId, WindowInfo};

use super::dispatcher::{DispatchError, DispatchReport};
use super::ports::{TextTyper, TypeRequest, WindowDirectory, WindowError};
use super::tracker::LastActiveWindow;

/// Errors from the type use case
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("No window matches '{0}'")]
    WindowNotFound(String),

    #[error("No active window was seen during the countdown")]
    NoActiveWindow,

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Window lookup failed: {0}")]
    Window(#[from] WindowError),
}

/// Which window receives the text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetSelector {
    /// Whatever has focus now
    #[default]
    Focused,
    /// A window id ("0x1A2B") or a case-insensitive title substring
    Explicit(String),
    /// The last foreign window seen by the tracker
    LastActive,
}

/// Input parameters for the type use case
#[derive(Debug, Clone)]
pub struct TypeInput {
    /// Text to type
    pub text: String,
    /// Layout name from the layout table
    pub layout: String,
    /// Pause after each character
    pub delay: Delay,
    /// Wait after focusing the target before typing
    pub focus_delay: Delay,
    /// Target window
    pub target: TargetSelector,
}

impl Default for TypeInput {
    fn default() -> Self {
        Self {
            text: String::new(),
            layout: String::new(),
            delay: Delay::default_char_delay(),
            focus_delay: Delay::default_focus_delay(),
            target: TargetSelector::default(),
        }
    }
}

/// Output from the type use case
#[derive(Debug, Clone, Default)]
pub struct TypeOutput {
    /// The window that was focused, if any
    pub target: Option<WindowInfo>,
    /// What was typed
    pub report: DispatchReport,
}

impl TypeOutput {
    /// Name of the target for status lines
    pub fn target_label(&self) -> String {
        match &self.target {
            Some(window) => window.title.clone(),
            None => "focused window".to_string(),
        }
    }
}

/// One-shot typing use case
pub struct TypeTextUseCase<W, T>
where
    W: WindowDirectory + ?Sized,
    T: TextTyper,
{
    directory: Arc<W>,
    typer: T,
    last_active: LastActiveWindow,
}

impl<W, T> TypeTextUseCase<W, T>
where
    W: WindowDirectory + ?Sized,
    T: TextTyper,
{
    /// Create a new use case instance
    pub fn new(directory: Arc<W>, typer: T, last_active: LastActiveWindow) -> Self {
        Self {
            directory,
            typer,
            last_active,
        }
    }

    /// Focus the target and type the text
    pub async fn execute(&self, input: TypeInput) -> Result<TypeOutput, TypeError> {
        if input.text.is_empty() {
            return Ok(TypeOutput::default());
        }

        let target = self.resolve_target(&input.target).await?;

        if let Some(window) = &target {
            if !self.directory.bring_to_foreground(window.id).await {
                log::warn!("Could not bring {} to the foreground", window.label());
            }
            if !input.focus_delay.is_zero() {
                tokio::time::sleep(input.focus_delay.as_std()).await;
            }
        }

        let report = self
            .typer
            .type_text(TypeRequest {
                text: input.text,
                layout: input.layout,
                delay: input.delay,
            })
            .await?;

        Ok(TypeOutput { target, report })
    }

    async fn resolve_target(
        &self,
        selector: &TargetSelector,
    ) -> Result<Option<WindowInfo>, TypeError> {
        match selector {
            TargetSelector::Focused => Ok(None),
            TargetSelector::LastActive => self
                .last_active
                .get()
                .map(Some)
                .ok_or(TypeError::NoActiveWindow),
            TargetSelector::Explicit(query) => {
                let windows = self.directory.enumerate().await?;
                find_window(&windows, query)
                    .cloned()
                    .map(Some)
                    .ok_or_else(|| TypeError::WindowNotFound(query.clone()))
            }
        }
    }
}

/// Match a window by id, exact title, then title substring (all case-insensitive)
pub fn find_window<'a>(windows: &'a [WindowInfo], query: &str) -> Option<&'a WindowInfo> {
    if let Some(id) = WindowId::parse(query) {
        if let Some(window) = windows.iter().find(|w| w.id == id) {
            return Some(window);
        }
    }

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    windows
        .iter()
        .find(|w| w.title.to_lowercase() == needle)
        .or_else(|| windows.iter().find(|w| w.title.to_lowercase().contains(&needle)))
}
