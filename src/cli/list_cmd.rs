//! Layout and window listing commands

use crate::application::ports::{WindowDirectory, WindowError};
use crate::domain::layout::{AUTO_LAYOUT_NAME, LAYOUTS};

use super::presenter::Presenter;

/// Print the layout table, "Auto" first
pub fn handle_layouts_command(presenter: &Presenter) {
    presenter.row(AUTO_LAYOUT_NAME, "active system layout");
    for entry in LAYOUTS {
        presenter.row(entry.name, entry.klid);
    }
}

/// Print visible titled windows with their ids
pub async fn handle_windows_command<W: WindowDirectory + ?Sized>(
    directory: &W,
    presenter: &Presenter,
) -> Result<(), WindowError> {
    let windows = directory.enumerate().await?;
    if windows.is_empty() {
        presenter.info("No windows found.");
        return Ok(());
    }

    for window in &windows {
        presenter.row(&window.id.to_string(), &window.title);
    }
    presenter.info(&format!("Found {} windows.", windows.len()));
    Ok(())
}
