//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod keyboard;
pub mod typer;
pub mod window;

// Re-export common types
pub use clipboard::{ClipboardError, ClipboardSource};
pub use config::ConfigStore;
pub use keyboard::{InjectionError, InputSink, LayoutTable};
pub use typer::{TextTyper, TypeRequest};
pub use window::{WindowDirectory, WindowError};
