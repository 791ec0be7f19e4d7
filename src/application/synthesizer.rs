//! Keystroke synthesis
//!
//! Turns a translated keystroke into press/release events:
//!
//!   Shift down → Control down → Alt down → key down → key up
//!     → Alt up → Control up → Shift up
//!
//! Modifiers are held by [`HeldModifiers`], which releases whatever it
//! pressed on every exit path. Release failures are logged, never returned:
//! the caller sees the error that stopped the keystroke.

use log::warn;

use crate::application::ports::{InjectionError, InputSink, LayoutTable};
use crate::application::translator::KeyStroke;
use crate::domain::keyboard::{
    Direction, KeyEvent, LayoutHandle, Modifier, ModifierSet, ScanCode, ENTER_SCAN_FALLBACK,
    VK_RETURN,
};

/// Modifiers held down for a single character.
pub struct HeldModifiers<'a, S: InputSink + ?Sized> {
    sink: &'a mut S,
    held: Vec<Modifier>,
}

impl<'a, S: InputSink + ?Sized> HeldModifiers<'a, S> {
    /// Press every modifier in the set, in press order.
    ///
    /// If a press fails, the modifiers already down are released before the
    /// error is returned.
    pub fn press(sink: &'a mut S, modifiers: ModifierSet) -> Result<Self, InjectionError> {
        let mut guard = Self {
            sink,
            held: Vec::with_capacity(modifiers.len()),
        };
        for modifier in modifiers.press_order() {
            guard
                .sink
                .send(&[KeyEvent::virtual_key(modifier.virtual_key(), Direction::Down)])?;
            guard.held.push(modifier);
        }
        Ok(guard)
    }

    /// The sink, for events sent while the modifiers are down
    pub fn sink(&mut self) -> &mut S {
        &mut *self.sink
    }

    /// Release all held modifiers now
    pub fn release(mut self) {
        self.release_all();
    }

    fn release_all(&mut self) {
        while let Some(modifier) = self.held.pop() {
            let event = KeyEvent::virtual_key(modifier.virtual_key(), Direction::Up);
            if let Err(e) = self.sink.send(&[event]) {
                warn!("Failed to release {} modifier, it may be stuck: {}", modifier, e);
            }
        }
    }
}

impl<S: InputSink + ?Sized> Drop for HeldModifiers<'_, S> {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// Press then release a key by scan code.
pub fn tap<S: InputSink + ?Sized>(
    sink: &mut S,
    scan: ScanCode,
    extended: bool,
) -> Result<(), InjectionError> {
    sink.send(&[KeyEvent::scan(scan, extended, Direction::Down)])?;
    sink.send(&[KeyEvent::scan(scan, extended, Direction::Up)])
}

/// Type one translated keystroke with its modifiers.
pub fn send_keystroke<S: InputSink + ?Sized>(
    sink: &mut S,
    stroke: &KeyStroke,
) -> Result<(), InjectionError> {
    let mut held = HeldModifiers::press(sink, stroke.modifiers)?;
    let result = tap(held.sink(), stroke.scan, stroke.extended);
    held.release();
    result
}

/// Tap Enter under the given layout.
pub fn send_enter<T, S>(table: &T, sink: &mut S, layout: LayoutHandle) -> Result<(), InjectionError>
where
    T: LayoutTable + ?Sized,
    S: InputSink + ?Sized,
{
    let scan = table
        .scan_code(VK_RETURN, layout)
        .unwrap_or(ENTER_SCAN_FALLBACK);
    tap(sink, scan, false)
}
