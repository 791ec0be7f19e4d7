//! Last active window tracking
//!
//! The program's own console steals focus when it starts. A background task
//! polls the focused window and remembers the last one that is not ours, so a
//! countdown can send the text back to where the user was.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::domain::timing::Delay;
use crate::domain::window::{WindowId, WindowInfo};

use super::ports::WindowDirectory;

/// Shared cell holding the last focused foreign window.
///
/// One tracker writes it; any number of readers may clone it.
#[derive(Debug, Clone, Default)]
pub struct LastActiveWindow {
    inner: Arc<RwLock<Option<WindowInfo>>>,
}

impl LastActiveWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the remembered window
    pub fn get(&self) -> Option<WindowInfo> {
        self.inner.read().clone()
    }

    pub fn set(&self, window: WindowInfo) {
        *self.inner.write() = Some(window);
    }
}

/// Polls the focused window into a [`LastActiveWindow`]
pub struct ActiveWindowTracker<W: WindowDirectory + ?Sized> {
    directory: Arc<W>,
    cell: LastActiveWindow,
    exclude: Option<WindowId>,
}

impl<W: WindowDirectory + ?Sized + 'static> ActiveWindowTracker<W> {
    /// Create a tracker.
    ///
    /// `exclude` is our own window; it is never recorded.
    pub fn new(directory: Arc<W>, cell: LastActiveWindow, exclude: Option<WindowId>) -> Self {
        Self {
            directory,
            cell,
            exclude,
        }
    }

    /// Sample the focused window once.
    ///
    /// # Returns
    /// true if the cell was updated
    pub async fn poll_once(&self) -> bool {
        match self.directory.current_active().await {
            Some(window) if Some(window.id) != self.exclude => {
                if self.cell.get().as_ref() != Some(&window) {
                    log::debug!("Active window is now {}", window.label());
                }
                self.cell.set(window);
                true
            }
            _ => false,
        }
    }

    /// Poll on a fixed interval until the handle is aborted.
    pub fn spawn(self, every: Delay) -> JoinHandle<()> {
        tokio::spawn(async move {
            let period = if every.is_zero() {
                Delay::default_poll_interval()
            } else {
                every
            };
            let mut ticker = interval(period.as_std());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                self.poll_once().await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::WindowError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays a fixed sequence of focused windows, then repeats the last
    struct MockDirectory {
        focus: Mutex<Vec<Option<WindowInfo>>>,
    }

    impl MockDirectory {
        fn new(focus: Vec<Option<WindowInfo>>) -> Self {
            Self {
                focus: Mutex::new(focus),
            }
        }
    }

    #[async_trait]
    impl WindowDirectory for MockDirectory {
        async fn enumerate(&self) -> Result<Vec<WindowInfo>, WindowError> {
            Ok(vec![])
        }

        async fn bring_to_foreground(&self, _id: WindowId) -> bool {
            true
        }

        async fn current_active(&self) -> Option<WindowInfo> {
            let mut focus = self.focus.lock().unwrap();
            if focus.len() > 1 {
                focus.remove(0)
            } else {
                focus.first().cloned().flatten()
            }
        }
    }

    fn window(id: u64, title: &str) -> WindowInfo {
        WindowInfo::new(WindowId(id), title)
    }

    #[test]
    fn cell_starts_empty() {
        assert_eq!(LastActiveWindow::new().get(), None);
    }

    #[test]
    fn clones_share_the_cell() {
        let cell = LastActiveWindow::new();
        let reader = cell.clone();
        cell.set(window(1, "Notepad"));
        assert_eq!(reader.get(), Some(window(1, "Notepad")));
        cell.set(window(2, "Terminal"));
        assert_eq!(reader.get(), Some(window(2, "Terminal")));
    }

    #[tokio::test]
    async fn poll_records_focused_window() {
        let directory = Arc::new(MockDirectory::new(vec![Some(window(7, "VM Console"))]));
        let cell = LastActiveWindow::new();
        let tracker = ActiveWindowTracker::new(directory, cell.clone(), None);

        assert!(tracker.poll_once().await);
        assert_eq!(cell.get(), Some(window(7, "VM Console")));
    }

    #[tokio::test]
    async fn own_window_is_ignored() {
        let directory = Arc::new(MockDirectory::new(vec![
            Some(window(7, "VM Console")),
            Some(window(1, "ghost-type")),
        ]));
        let cell = LastActiveWindow::new();
        let tracker = ActiveWindowTracker::new(directory, cell.clone(), Some(WindowId(1)));

        assert!(tracker.poll_once().await);
        assert!(!tracker.poll_once().await);
        assert_eq!(cell.get(), Some(window(7, "VM Console")));
    }

    #[tokio::test]
    async fn no_focus_keeps_previous_window() {
        let directory = Arc::new(MockDirectory::new(vec![Some(window(7, "VM Console")), None]));
        let cell = LastActiveWindow::new();
        let tracker = ActiveWindowTracker::new(directory, cell.clone(), None);

        tracker.poll_once().await;
        assert!(!tracker.poll_once().await);
        assert_eq!(cell.get(), Some(window(7, "VM Console")));
    }

    #[tokio::test]
    async fn spawned_tracker_updates_cell() {
        let directory = Arc::new(MockDirectory::new(vec![Some(window(9, "Terminal"))]));
        let cell = LastActiveWindow::new();
        let handle =
            ActiveWindowTracker::new(directory, cell.clone(), None).spawn(Delay::from_millis(5));

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        handle.abort();

        assert_eq!(cell.get(), Some(window(9, "Terminal")));
    }
}
