//! Keyboard layout domain module

mod catalog;

pub use catalog::{find_layout, LayoutEntry, LayoutRequest, AUTO_LAYOUT_NAME, KLID_EN_US, LAYOUTS};
