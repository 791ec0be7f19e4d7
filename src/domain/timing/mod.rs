//! Timing value objects

mod delay;

pub use delay::{Delay, DEFAULT_CHAR_DELAY_MS, DEFAULT_FOCUS_DELAY_MS, DEFAULT_POLL_INTERVAL_MS};
