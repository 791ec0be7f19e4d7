//! Keyboard infrastructure module
//!
//! Provides the native Windows layout table and input sink, a portable
//! text-input table with an enigo sink for other platforms, and backend
//! selection.

mod enigo;
mod factory;
mod portable;
mod typer;
#[cfg(windows)]
mod win32;

pub use enigo::EnigoInputSink;
pub use factory::{
    open_backend, select_backend, Backend, BackendPair, BackendPreference, ParseBackendError,
};
pub use portable::{PortableLayoutTable, SYSTEM_LAYOUT};
pub use typer::BlockingTyper;
#[cfg(windows)]
pub use win32::{Win32InputSink, Win32LayoutTable};
