//! GhostType - type text as physical keystrokes
//!
//! This crate types Unicode text into a target window as simulated key
//! presses under a selected keyboard layout, for consoles (VM viewers,
//! embedded terminals) that ignore paste. Characters without a key in the
//! layout are injected as raw Unicode.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Keys, modifiers, layouts, delays, windows and errors
//! - **Application**: The typing pipeline, use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Win32, enigo, clipboard, config)
//! - **CLI**: Command-line interface, argument parsing, and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
