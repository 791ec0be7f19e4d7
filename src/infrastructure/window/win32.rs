//! Windows window directory using user32

use async_trait::async_trait;
use windows_sys::Win32::Foundation::{BOOL, HWND, LPARAM};
use windows_sys::Win32::System::Console::GetConsoleWindow;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible,
    SetForegroundWindow,
};

use crate::application::ports::{WindowDirectory, WindowError};
use crate::domain::window::{sort_by_title, WindowId, WindowInfo};

fn to_hwnd(id: WindowId) -> HWND {
    id.0 as usize as HWND
}

fn window_id(hwnd: HWND) -> WindowId {
    WindowId(hwnd as usize as u64)
}

/// Title of a window, or `None` if it has none
fn window_title(hwnd: HWND) -> Option<WindowInfo> {
    // SAFETY: the handle comes from the OS; a stale handle yields 0
    let length = unsafe { GetWindowTextLengthW(hwnd) };
    if length <= 0 {
        return None;
    }

    let mut buf = vec![0u16; length as usize + 1];
    // SAFETY: `buf` holds `length + 1` units including the terminator
    let copied = unsafe { GetWindowTextW(hwnd, buf.as_mut_ptr(), buf.len() as i32) };
    if copied <= 0 {
        return None;
    }

    let title = String::from_utf16_lossy(&buf[..copied as usize]);
    let info = WindowInfo::new(window_id(hwnd), &title);
    (!info.title.is_empty()).then_some(info)
}

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: `lparam` is the `&mut Vec<WindowInfo>` passed to EnumWindows below
    let windows = &mut *(lparam as *mut Vec<WindowInfo>);
    if IsWindowVisible(hwnd) != 0 {
        if let Some(info) = window_title(hwnd) {
            windows.push(info);
        }
    }
    1
}

/// The console window this process runs in, if any
pub fn own_console_window() -> Option<WindowId> {
    // SAFETY: no arguments
    let hwnd = unsafe { GetConsoleWindow() };
    (!hwnd.is_null()).then(|| window_id(hwnd))
}

/// Window directory backed by user32
#[derive(Debug, Default)]
pub struct Win32WindowDirectory;

impl Win32WindowDirectory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WindowDirectory for Win32WindowDirectory {
    async fn enumerate(&self) -> Result<Vec<WindowInfo>, WindowError> {
        let mut windows: Vec<WindowInfo> = Vec::new();
        // SAFETY: the callback only runs during this call, while `windows` is borrowed
        let ok = unsafe {
            EnumWindows(
                Some(collect_window),
                &mut windows as *mut Vec<WindowInfo> as LPARAM,
            )
        };
        if ok == 0 {
            return Err(WindowError::EnumerationFailed(
                std::io::Error::last_os_error().to_string(),
            ));
        }
        sort_by_title(&mut windows);
        Ok(windows)
    }

    async fn bring_to_foreground(&self, id: WindowId) -> bool {
        // SAFETY: a stale handle makes the call fail, nothing more
        unsafe { SetForegroundWindow(to_hwnd(id)) != 0 }
    }

    async fn current_active(&self) -> Option<WindowInfo> {
        // SAFETY: no arguments
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_null() {
            return None;
        }
        window_title(hwnd)
    }
}
