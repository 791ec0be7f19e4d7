//! Unicode fallback injection for characters without a physical key

use log::debug;

use crate::application::ports::{InjectionError, InputSink};
use crate::domain::keyboard::{Direction, KeyEvent};
use crate::domain::timing::Delay;

/// Send a character as raw UTF-16 text input.
///
/// Each code unit is sent as its own press/release pair followed by a
/// pause, so astral characters produce two pairs. Zero units are skipped.
///
/// # Returns
/// The number of units sent
pub fn send_unicode<S: InputSink + ?Sized>(
    sink: &mut S,
    ch: char,
    delay: Delay,
) -> Result<usize, InjectionError> {
    let mut buf = [0u16; 2];
    let mut sent = 0;

    for &unit in ch.encode_utf16(&mut buf).iter() {
        if unit == 0 {
            debug!("Skipping zero code unit for {:?}", ch);
            continue;
        }
        sink.send(&[
            KeyEvent::unicode(unit, Direction::Down),
            KeyEvent::unicode(unit, Direction::Up),
        ])?;
        sink.pace(delay);
        sent += 1;
    }

    Ok(sent)
}
