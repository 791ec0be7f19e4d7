//! Layout resolution

use log::{debug, warn};

use crate::application::ports::LayoutTable;
use crate::domain::keyboard::LayoutHandle;
use crate::domain::layout::LayoutRequest;

/// Pin the layout for one dispatch.
///
/// Never fails. Empty, "Auto" and unknown names use the active layout, and
/// so does a known layout the OS refuses to load.
pub fn resolve_layout<T: LayoutTable + ?Sized>(table: &T, name: &str) -> LayoutHandle {
    match LayoutRequest::from_name(name) {
        LayoutRequest::System => {
            let handle = table.active();
            debug!("Using system layout {} for '{}'", handle, name);
            handle
        }
        LayoutRequest::Klid(klid) => match table.load(klid) {
            Some(handle) => {
                debug!("Loaded layout '{}' (KLID {}) as {}", name, klid, handle);
                handle
            }
            None => {
                let handle = table.active();
                warn!(
                    "Could not load layout '{}' (KLID {}), using system layout {}",
                    name, klid, handle
                );
                handle
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::{FakeLayouts, DE, US};

    #[test]
    fn known_name_loads_layout() {
        let table = FakeLayouts::standard();
        assert_eq!(resolve_layout(&table, "German (DE)"), DE);
        assert_eq!(*table.loads.borrow(), vec!["00000407".to_string()]);
    }

    #[test]
    fn empty_name_uses_active_without_loading() {
        let table = FakeLayouts::standard().with_active(DE);
        assert_eq!(resolve_layout(&table, ""), DE);
        assert!(table.loads.borrow().is_empty());
    }

    #[test]
    fn auto_uses_active() {
        let table = FakeLayouts::standard().with_active(DE);
        assert_eq!(resolve_layout(&table, "Auto (Use System)"), DE);
    }

    #[test]
    fn unknown_name_uses_active() {
        let table = FakeLayouts::standard();
        assert_eq!(resolve_layout(&table, "Elvish (ME)"), US);
        assert!(table.loads.borrow().is_empty());
    }

    #[test]
    fn load_failure_falls_back_to_active() {
        let table = FakeLayouts::standard().with_active(DE);
        // The fake cannot load French
        assert_eq!(resolve_layout(&table, "French (FR)"), DE);
        assert_eq!(*table.loads.borrow(), vec!["0000040C".to_string()]);
    }
}
