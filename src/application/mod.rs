//! Application layer - Typing pipeline, use cases and port interfaces
//!
//! Contains the keystroke pipeline (layout resolution, translation,
//! synthesis, Unicode fallback, dispatch), the window tracker, the type
//! use case and the trait definitions for external system interactions.

pub mod dispatcher;
pub mod fallback;
pub mod layout;
pub mod ports;
pub mod synthesizer;
pub mod tracker;
pub mod translator;
pub mod type_text;

#[cfg(test)]
pub(crate) mod fakes;

// Re-export the pipeline and use cases
pub use dispatcher::{dispatch, DispatchError, DispatchReport};
pub use layout::resolve_layout;
pub use tracker::{ActiveWindowTracker, LastActiveWindow};
pub use translator::{translate, KeyStroke, Untranslatable};
pub use type_text::{TargetSelector, TypeError, TypeInput, TypeOutput, TypeTextUseCase};
