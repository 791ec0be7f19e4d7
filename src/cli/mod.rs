//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the command
//! handlers and runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod list_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_type, TypeOptions, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
