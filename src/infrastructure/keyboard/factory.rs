//! Input backend selection

use std::fmt;
use std::str::FromStr;

use crate::application::ports::{InjectionError, InputSink, LayoutTable};

use super::enigo::EnigoInputSink;
use super::portable::PortableLayoutTable;
#[cfg(windows)]
use super::win32::{Win32InputSink, Win32LayoutTable};

/// Available input backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// OS layout tables and native injection (Windows)
    Native,
    /// Text input through enigo, typed under the OS layout
    Enigo,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Native => write!(f, "native"),
            Backend::Enigo => write!(f, "enigo"),
        }
    }
}

/// User preference for backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// Native where available, enigo elsewhere
    #[default]
    Auto,
    Native,
    Enigo,
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendPreference::Auto => write!(f, "auto"),
            BackendPreference::Native => write!(f, "native"),
            BackendPreference::Enigo => write!(f, "enigo"),
        }
    }
}

/// Error type for parsing a backend preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid backend '{}'. Valid options: auto, native, enigo",
            self.value
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for BackendPreference {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            "native" => Ok(BackendPreference::Native),
            "enigo" => Ok(BackendPreference::Enigo),
            _ => Err(ParseBackendError {
                value: s.to_string(),
            }),
        }
    }
}

/// Pick the backend for a preference on this platform.
///
/// `Native` is only available on Windows.
pub fn select_backend(preference: BackendPreference) -> Result<Backend, InjectionError> {
    match preference {
        BackendPreference::Enigo => Ok(Backend::Enigo),
        BackendPreference::Native if cfg!(windows) => Ok(Backend::Native),
        BackendPreference::Native => Err(InjectionError::Unavailable(
            "the native backend requires Windows".to_string(),
        )),
        BackendPreference::Auto if cfg!(windows) => Ok(Backend::Native),
        BackendPreference::Auto => Ok(Backend::Enigo),
    }
}

/// Layout table and input sink for a backend
pub type BackendPair = (Box<dyn LayoutTable>, Box<dyn InputSink>);

/// Open a backend.
///
/// The sink connects to the OS input system here, so this should run on
/// the thread that will type.
pub fn open_backend(backend: Backend) -> Result<BackendPair, InjectionError> {
    match backend {
        #[cfg(windows)]
        Backend::Native => Ok((
            Box::new(Win32LayoutTable::new()),
            Box::new(Win32InputSink::new()),
        )),
        #[cfg(not(windows))]
        Backend::Native => Err(InjectionError::Unavailable(
            "the native backend requires Windows".to_string(),
        )),
        Backend::Enigo => Ok((
            Box::new(PortableLayoutTable::new()),
            Box::new(EnigoInputSink::new()?),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_display() {
        assert_eq!(Backend::Native.to_string(), "native");
        assert_eq!(Backend::Enigo.to_string(), "enigo");
    }

    #[test]
    fn preference_from_str() {
        assert_eq!("auto".parse::<BackendPreference>().unwrap(), BackendPreference::Auto);
        assert_eq!("NATIVE".parse::<BackendPreference>().unwrap(), BackendPreference::Native);
        assert_eq!(" enigo ".parse::<BackendPreference>().unwrap(), BackendPreference::Enigo);
    }

    #[test]
    fn preference_from_str_invalid() {
        let err = "xdotool".parse::<BackendPreference>().unwrap_err();
        assert_eq!(err.value, "xdotool");
        assert!(err.to_string().contains("auto, native, enigo"));
    }

    #[test]
    fn preference_default_is_auto() {
        assert_eq!(BackendPreference::default(), BackendPreference::Auto);
        assert_eq!(BackendPreference::default().to_string(), "auto");
    }

    #[test]
    fn enigo_is_always_selectable() {
        assert_eq!(select_backend(BackendPreference::Enigo).unwrap(), Backend::Enigo);
    }

    #[cfg(windows)]
    #[test]
    fn auto_prefers_native_on_windows() {
        assert_eq!(select_backend(BackendPreference::Auto).unwrap(), Backend::Native);
    }

    #[cfg(not(windows))]
    #[test]
    fn auto_uses_enigo_elsewhere() {
        assert_eq!(select_backend(BackendPreference::Auto).unwrap(), Backend::Enigo);
        assert!(select_backend(BackendPreference::Native).is_err());
    }
}
