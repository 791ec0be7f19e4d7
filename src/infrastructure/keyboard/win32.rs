//! Native Windows layout table and input sink
//!
//! Layout queries go through the user32 keyboard-layout API and events are
//! injected with `SendInput`, so the target sees hardware-like scan codes.

use std::io;
use std::mem::size_of;

use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    GetKeyboardLayout, LoadKeyboardLayoutW, MapVirtualKeyExW, SendInput, VkKeyScanExW, INPUT,
    INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP,
    KEYEVENTF_SCANCODE, KEYEVENTF_UNICODE, MAPVK_VK_TO_VSC,
};
use windows_sys::Win32::UI::TextServices::HKL;

use crate::application::ports::{InjectionError, InputSink, LayoutTable};
use crate::domain::keyboard::{
    decode_key_scan, Direction, KeyEvent, LayoutHandle, ScanCode, VirtualKey,
};

fn to_hkl(layout: LayoutHandle) -> HKL {
    layout.0 as HKL
}

fn from_hkl(hkl: HKL) -> LayoutHandle {
    LayoutHandle(hkl as usize)
}

/// Layout table backed by the Windows keyboard-layout API
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32LayoutTable;

impl Win32LayoutTable {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutTable for Win32LayoutTable {
    fn active(&self) -> LayoutHandle {
        // SAFETY: thread id 0 means the calling thread; no pointers involved
        from_hkl(unsafe { GetKeyboardLayout(0) })
    }

    fn load(&self, klid: &str) -> Option<LayoutHandle> {
        let wide: Vec<u16> = klid.encode_utf16().chain(std::iter::once(0)).collect();
        // SAFETY: `wide` is NUL-terminated and outlives the call
        let hkl = unsafe { LoadKeyboardLayoutW(wide.as_ptr(), 0) };
        (!hkl.is_null()).then(|| from_hkl(hkl))
    }

    fn key_scan(&self, unit: u16, layout: LayoutHandle) -> Option<(VirtualKey, u8)> {
        // SAFETY: plain value arguments
        decode_key_scan(unsafe { VkKeyScanExW(unit, to_hkl(layout)) })
    }

    fn scan_code(&self, key: VirtualKey, layout: LayoutHandle) -> Option<ScanCode> {
        // SAFETY: plain value arguments
        let scan = unsafe { MapVirtualKeyExW(u32::from(key.0), MAPVK_VK_TO_VSC, to_hkl(layout)) };
        u16::try_from(scan).ok().and_then(ScanCode::new)
    }
}

/// Input sink backed by `SendInput`
#[derive(Debug, Default)]
pub struct Win32InputSink;

impl Win32InputSink {
    pub fn new() -> Self {
        Self
    }
}

fn keyboard_input(event: &KeyEvent) -> INPUT {
    let (vk, scan, mut flags, direction) = match *event {
        KeyEvent::Virtual { key, direction } => (key.0, 0, 0, direction),
        KeyEvent::Scan {
            code,
            extended,
            direction,
        } => {
            let flags = if extended {
                KEYEVENTF_SCANCODE | KEYEVENTF_EXTENDEDKEY
            } else {
                KEYEVENTF_SCANCODE
            };
            (0, code.0, flags, direction)
        }
        KeyEvent::Unicode { unit, direction } => (0, unit, KEYEVENTF_UNICODE, direction),
    };
    if direction == Direction::Up {
        flags |= KEYEVENTF_KEYUP;
    }

    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: scan,
                dwFlags: flags,
                // The OS stamps the event
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

impl InputSink for Win32InputSink {
    fn send(&mut self, events: &[KeyEvent]) -> Result<(), InjectionError> {
        if events.is_empty() {
            return Ok(());
        }
        let inputs: Vec<INPUT> = events.iter().map(keyboard_input).collect();
        let count = u32::try_from(inputs.len())
            .map_err(|_| InjectionError::SendFailed("too many events".to_string()))?;

        // SAFETY: `inputs` holds `count` initialised INPUT structs
        let accepted =
            unsafe { SendInput(count, inputs.as_ptr(), size_of::<INPUT>() as i32) } as usize;

        if accepted == inputs.len() {
            Ok(())
        } else {
            Err(InjectionError::Rejected {
                requested: inputs.len(),
                accepted,
                reason: io::Error::last_os_error().to_string(),
            })
        }
    }
}
