//! In-memory layout table and recording input sink for tests

use std::cell::RefCell;
use std::collections::HashMap;

use crate::application::ports::{InjectionError, InputSink, LayoutTable};
use crate::domain::keyboard::{
    Direction, KeyEvent, LayoutHandle, ScanCode, VirtualKey, VK_CONTROL, VK_MENU, VK_RETURN,
    VK_SHIFT,
};
use crate::domain::timing::Delay;

pub const US: LayoutHandle = LayoutHandle(0x0409);
pub const DE: LayoutHandle = LayoutHandle(0x0407);

pub const VK_H: VirtualKey = VirtualKey(0x48);
pub const VK_I: VirtualKey = VirtualKey(0x49);
pub const VK_A: VirtualKey = VirtualKey(0x41);
pub const VK_B: VirtualKey = VirtualKey(0x42);
pub const VK_E: VirtualKey = VirtualKey(0x45);
pub const VK_Q: VirtualKey = VirtualKey(0x51);
pub const VK_1: VirtualKey = VirtualKey(0x31);
pub const VK_DELETE: VirtualKey = VirtualKey(0x2E);

pub const SC_H: ScanCode = ScanCode(0x23);
pub const SC_I: ScanCode = ScanCode(0x17);
pub const SC_A: ScanCode = ScanCode(0x1E);
pub const SC_B: ScanCode = ScanCode(0x30);
pub const SC_E: ScanCode = ScanCode(0x12);
pub const SC_Q: ScanCode = ScanCode(0x10);
pub const SC_1: ScanCode = ScanCode(0x02);
pub const SC_ENTER: ScanCode = ScanCode(0x1C);
pub const SC_DELETE: ScanCode = ScanCode(0x53);

/// Deterministic layout table.
///
/// US knows a small QWERTY subset; DE adds AltGr characters. Loading any
/// other KLID fails.
#[derive(Default)]
pub struct FakeLayouts {
    active: Option<LayoutHandle>,
    keys: HashMap<(LayoutHandle, u16), (VirtualKey, u8)>,
    scans: HashMap<(LayoutHandle, VirtualKey), ScanCode>,
    pub loads: RefCell<Vec<String>>,
    pub lookups: RefCell<Vec<u16>>,
}

impl FakeLayouts {
    /// A table that knows nothing
    pub fn empty() -> Self {
        Self {
            active: Some(US),
            ..Default::default()
        }
    }

    /// US and DE subsets, US active
    pub fn standard() -> Self {
        let mut table = Self::empty();
        for layout in [US, DE] {
            for (ch, vk, scan) in [('a', VK_A, SC_A), ('b', VK_B, SC_B), ('h', VK_H, SC_H), ('i', VK_I, SC_I), ('e', VK_E, SC_E)] {
                table.map(layout, ch, vk, 0x00, scan);
                table.map(layout, ch.to_ascii_uppercase(), vk, 0x01, scan);
            }
            table.map(layout, '1', VK_1, 0x00, SC_1);
            table.map(layout, '!', VK_1, 0x01, SC_1);
            table.scans.insert((layout, VK_RETURN), SC_ENTER);
            table.scans.insert((layout, VK_DELETE), SC_DELETE);
            table.keys.insert((layout, 0x7F), (VK_DELETE, 0x00));
        }
        // AltGr characters on the German layout
        table.map(DE, '€', VK_E, 0x06, SC_E);
        table.map(DE, '@', VK_Q, 0x06, SC_Q);
        table
    }

    /// Change the active layout
    pub fn with_active(mut self, layout: LayoutHandle) -> Self {
        self.active = Some(layout);
        self
    }

    /// Map a character, but leave its key without a scan code
    pub fn with_unscannable(mut self, layout: LayoutHandle, ch: char, vk: VirtualKey) -> Self {
        self.keys.insert((layout, ch as u16), (vk, 0x00));
        self
    }

    /// Drop the Enter scan code so the hard-coded fallback is used
    pub fn without_enter(mut self) -> Self {
        self.scans.retain(|(_, vk), _| *vk != VK_RETURN);
        self
    }

    fn map(&mut self, layout: LayoutHandle, ch: char, vk: VirtualKey, state: u8, scan: ScanCode) {
        self.keys.insert((layout, ch as u16), (vk, state));
        self.scans.insert((layout, vk), scan);
    }
}

impl LayoutTable for FakeLayouts {
    fn active(&self) -> LayoutHandle {
        self.active.unwrap_or(US)
    }

    fn load(&self, klid: &str) -> Option<LayoutHandle> {
        self.loads.borrow_mut().push(klid.to_string());
        match klid {
            "00000409" => Some(US),
            "00000407" => Some(DE),
            _ => None,
        }
    }

    fn key_scan(&self, unit: u16, layout: LayoutHandle) -> Option<(VirtualKey, u8)> {
        self.lookups.borrow_mut().push(unit);
        self.keys.get(&(layout, unit)).copied()
    }

    fn scan_code(&self, key: VirtualKey, layout: LayoutHandle) -> Option<ScanCode> {
        self.scans.get(&(layout, key)).copied()
    }
}

/// Something that reached the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    Event(KeyEvent),
    Pause(Delay),
}

/// Input sink that records events and can be told to fail.
#[derive(Default)]
pub struct RecordingSink {
    pub log: Vec<Recorded>,
    /// Number of successful `send` calls before every later call fails
    fail_after: Option<usize>,
    /// Events that are always rejected
    reject: Vec<KeyEvent>,
    sends: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(sends: usize) -> Self {
        Self {
            fail_after: Some(sends),
            ..Default::default()
        }
    }

    pub fn rejecting(mut self, event: KeyEvent) -> Self {
        self.reject.push(event);
        self
    }

    pub fn events(&self) -> Vec<KeyEvent> {
        self.log
            .iter()
            .filter_map(|r| match r {
                Recorded::Event(e) => Some(*e),
                Recorded::Pause(_) => None,
            })
            .collect()
    }

    pub fn pauses(&self) -> usize {
        self.log
            .iter()
            .filter(|r| matches!(r, Recorded::Pause(_)))
            .count()
    }

    /// Modifier virtual-key events only
    pub fn modifier_events(&self) -> Vec<KeyEvent> {
        self.events()
            .into_iter()
            .filter(|e| {
                matches!(e, KeyEvent::Virtual { key, .. } if [VK_SHIFT, VK_CONTROL, VK_MENU].contains(key))
            })
            .collect()
    }
}

impl InputSink for RecordingSink {
    fn send(&mut self, events: &[KeyEvent]) -> Result<(), InjectionError> {
        if self.fail_after.is_some_and(|n| self.sends >= n)
            || events.iter().any(|e| self.reject.contains(e))
        {
            return Err(InjectionError::Rejected {
                requested: events.len(),
                accepted: 0,
                reason: "access denied".to_string(),
            });
        }
        self.sends += 1;
        self.log.extend(events.iter().map(|e| Recorded::Event(*e)));
        Ok(())
    }

    fn pace(&mut self, delay: Delay) {
        self.log.push(Recorded::Pause(delay));
    }
}

pub fn vk(key: VirtualKey, direction: Direction) -> KeyEvent {
    KeyEvent::virtual_key(key, direction)
}

pub fn sc(code: ScanCode, direction: Direction) -> KeyEvent {
    KeyEvent::scan(code, false, direction)
}

pub fn uni(unit: u16, direction: Direction) -> KeyEvent {
    KeyEvent::unicode(unit, direction)
}
