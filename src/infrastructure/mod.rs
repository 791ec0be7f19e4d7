//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces, integrating
//! with the OS keyboard and window APIs, enigo, the clipboard and the
//! config file.

pub mod clipboard;
pub mod config;
pub mod keyboard;
pub mod window;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard};
pub use config::XdgConfigStore;
pub use keyboard::{
    open_backend, select_backend, Backend, BackendPreference, BlockingTyper, EnigoInputSink,
    PortableLayoutTable,
};
pub use window::{create_window_directory, own_window, NoOpWindowDirectory};
