//! Cross-platform input sink using enigo
//!
//! Works on Windows, macOS, and Linux (X11). Raw keycodes differ per
//! platform (X11 keycodes, CGKeyCodes, Windows scan codes), so scan code
//! events are only accepted for keys enigo can name. Text goes through
//! enigo's text input.

use enigo::{Direction as EnigoDirection, Enigo, Key, Keyboard, Settings};

use crate::application::ports::{InjectionError, InputSink};
use crate::domain::keyboard::{
    Direction, KeyEvent, ScanCode, VirtualKey, ENTER_SCAN_FALLBACK, VK_CONTROL, VK_MENU, VK_SHIFT,
};

/// Cross-platform input sink using enigo
pub struct EnigoInputSink {
    enigo: Enigo,
    /// High surrogate waiting for its low half
    pending_surrogate: Option<u16>,
}

impl EnigoInputSink {
    /// Connect to the platform input system
    pub fn new() -> Result<Self, InjectionError> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| InjectionError::Unavailable(format!("Failed to create enigo: {}", e)))?;
        Ok(Self {
            enigo,
            pending_surrogate: None,
        })
    }

    fn send_one(&mut self, event: &KeyEvent) -> Result<(), InjectionError> {
        match *event {
            KeyEvent::Virtual { key, direction } => {
                let key = modifier_key(key).ok_or_else(|| {
                    InjectionError::Unsupported(format!("{} is not a modifier", key))
                })?;
                self.enigo
                    .key(key, enigo_direction(direction))
                    .map_err(|e| InjectionError::SendFailed(e.to_string()))
            }
            KeyEvent::Scan {
                code, direction, ..
            } => {
                let key = scan_key(code).ok_or_else(|| {
                    InjectionError::Unsupported(format!("{} has no portable key", code))
                })?;
                self.enigo
                    .key(key, enigo_direction(direction))
                    .map_err(|e| InjectionError::SendFailed(e.to_string()))
            }
            KeyEvent::Unicode { unit, direction } => match direction {
                Direction::Down => self.send_unit(unit),
                // enigo types whole characters; the release is implied
                Direction::Up => Ok(()),
            },
        }
    }

    fn send_unit(&mut self, unit: u16) -> Result<(), InjectionError> {
        if (0xD800..=0xDBFF).contains(&unit) {
            self.pending_surrogate = Some(unit);
            return Ok(());
        }

        let ch = match self.pending_surrogate.take() {
            Some(high) => char::decode_utf16([high, unit]).next().and_then(Result::ok),
            None => char::from_u32(u32::from(unit)),
        }
        .ok_or_else(|| InjectionError::Unsupported(format!("unpaired surrogate 0x{:04X}", unit)))?;

        self.enigo
            .text(&ch.to_string())
            .map_err(|e| InjectionError::SendFailed(format!("Failed to type text: {}", e)))
    }
}

impl InputSink for EnigoInputSink {
    fn send(&mut self, events: &[KeyEvent]) -> Result<(), InjectionError> {
        for (accepted, event) in events.iter().enumerate() {
            self.send_one(event).map_err(|e| match e {
                InjectionError::SendFailed(reason) => InjectionError::Rejected {
                    requested: events.len(),
                    accepted,
                    reason,
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

fn enigo_direction(direction: Direction) -> EnigoDirection {
    match direction {
        Direction::Down => EnigoDirection::Press,
        Direction::Up => EnigoDirection::Release,
    }
}

fn modifier_key(key: VirtualKey) -> Option<Key> {
    match key {
        VK_SHIFT => Some(Key::Shift),
        VK_CONTROL => Some(Key::Control),
        VK_MENU => Some(Key::Alt),
        _ => None,
    }
}

fn scan_key(code: ScanCode) -> Option<Key> {
    (code == ENTER_SCAN_FALLBACK).then_some(Key::Return)
}
