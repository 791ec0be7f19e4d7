//! Domain layer - Core value objects
//!
//! Contains keys, modifiers, layouts, timing, windows, configuration
//! and domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod keyboard;
pub mod layout;
pub mod timing;
pub mod window;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use keyboard::{Direction, KeyEvent, LayoutHandle, Modifier, ModifierSet, ScanCode, VirtualKey};
pub use layout::{LayoutEntry, LayoutRequest, LAYOUTS};
pub use timing::Delay;
pub use window::{WindowId, WindowInfo};
