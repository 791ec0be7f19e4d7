//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// GhostType - type text as physical keystrokes
#[derive(Parser, Debug)]
#[command(name = "ghost-type")]
#[command(version)]
#[command(about = "Type text into any window as keystrokes, honoring the keyboard layout")]
#[command(long_about = None)]
pub struct Cli {
    /// Text to type ("-" reads standard input)
    #[arg(value_name = "TEXT", conflicts_with = "clipboard")]
    pub text: Option<String>,

    /// Keyboard layout name (see `ghost-type layouts`)
    #[arg(short = 'l', long, value_name = "NAME")]
    pub layout: Option<String>,

    /// Pause after each character (e.g., 7ms, 0)
    #[arg(short = 'd', long, value_name = "TIME")]
    pub delay: Option<String>,

    /// Target window: title substring or id (e.g., 0x1A2B)
    #[arg(short = 'w', long, value_name = "TITLE|ID", conflicts_with = "countdown")]
    pub window: Option<String>,

    /// Type the clipboard text instead of TEXT
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Wait before typing, then type into the last active window
    #[arg(long, value_name = "TIME")]
    pub countdown: Option<String>,

    /// Pause between focusing the target and typing
    #[arg(long, value_name = "TIME")]
    pub focus_delay: Option<String>,

    /// Input backend: auto, native, enigo
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the keyboard layouts
    Layouts,
    /// List visible windows that can be targeted
    Windows,
    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get an effective config value
    Get {
        /// Config key
        key: String,
    },
    /// List all effective config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "layout",
    "delay",
    "focus_delay",
    "countdown",
    "poll_interval",
    "backend",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
