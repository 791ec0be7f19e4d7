//! Keyboard layout and input stream port interfaces
//!
//! These are the OS seams of the typing core. Both are synchronous: every
//! call maps onto one blocking OS request.

use thiserror::Error;

use crate::domain::keyboard::{KeyEvent, LayoutHandle, ScanCode, VirtualKey};
use crate::domain::timing::Delay;

/// Input injection errors
#[derive(Debug, Clone, Error)]
pub enum InjectionError {
    #[error("Input was rejected: {accepted} of {requested} events accepted ({reason})")]
    Rejected {
        requested: usize,
        accepted: usize,
        reason: String,
    },

    #[error("Input backend unavailable: {0}")]
    Unavailable(String),

    #[error("Event not supported by this backend: {0}")]
    Unsupported(String),

    #[error("Failed to send input: {0}")]
    SendFailed(String),
}

/// Port for querying keyboard layouts
pub trait LayoutTable {
    /// The layout currently active for this process
    fn active(&self) -> LayoutHandle;

    /// Load (or look up) a layout by KLID.
    ///
    /// # Returns
    /// `None` if the layout cannot be loaded
    fn load(&self, klid: &str) -> Option<LayoutHandle>;

    /// Find the virtual key and shift-state byte that produce a UTF-16 unit.
    ///
    /// # Returns
    /// `None` if the layout has no key for this unit
    fn key_scan(&self, unit: u16, layout: LayoutHandle) -> Option<(VirtualKey, u8)>;

    /// Resolve a virtual key to its hardware scan code under a layout.
    fn scan_code(&self, key: VirtualKey, layout: LayoutHandle) -> Option<ScanCode>;
}

/// Port for the OS input stream
pub trait InputSink {
    /// Enqueue events, in order, as if from a physical keyboard.
    fn send(&mut self, events: &[KeyEvent]) -> Result<(), InjectionError>;

    /// Wait between characters so slow targets keep up.
    fn pace(&mut self, delay: Delay) {
        if !delay.is_zero() {
            std::thread::sleep(delay.as_std());
        }
    }
}

impl<T: LayoutTable + ?Sized> LayoutTable for Box<T> {
    fn active(&self) -> LayoutHandle {
        self.as_ref().active()
    }

    fn load(&self, klid: &str) -> Option<LayoutHandle> {
        self.as_ref().load(klid)
    }

    fn key_scan(&self, unit: u16, layout: LayoutHandle) -> Option<(VirtualKey, u8)> {
        self.as_ref().key_scan(unit, layout)
    }

    fn scan_code(&self, key: VirtualKey, layout: LayoutHandle) -> Option<ScanCode> {
        self.as_ref().scan_code(key, layout)
    }
}

impl<T: InputSink + ?Sized> InputSink for Box<T> {
    fn send(&mut self, events: &[KeyEvent]) -> Result<(), InjectionError> {
        self.as_mut().send(events)
    }

    fn pace(&mut self, delay: Delay) {
        self.as_mut().pace(delay)
    }
}
