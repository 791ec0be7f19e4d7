//! Text dispatch: the "type this text" operation
//!
//! Walks the text one code point at a time. Newlines become Enter, other
//! characters are translated to physical keys under the pinned layout, and
//! characters without a key are sent as raw Unicode. The first injection
//! failure stops the dispatch; whatever was typed before it stays typed.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::application::fallback::send_unicode;
use crate::application::layout::resolve_layout;
use crate::application::ports::{InjectionError, InputSink, LayoutTable};
use crate::application::synthesizer::{send_enter, send_keystroke};
use crate::application::translator::translate;
use crate::domain::keyboard::LayoutHandle;
use crate::domain::timing::Delay;

/// Summary of a completed dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Code points processed
    pub characters: usize,
    /// Characters typed as physical keystrokes
    pub keystrokes: usize,
    /// Characters typed through Unicode injection
    pub fallbacks: usize,
    /// Newlines typed as Enter
    pub enters: usize,
}

impl fmt::Display for DispatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} characters ({} keystrokes, {} unicode, {} enter)",
            self.characters, self.keystrokes, self.fallbacks, self.enters
        )
    }
}

/// A dispatch stopped by an injection failure
#[derive(Debug, Clone, Error)]
#[error("{source} (stopped after {typed} characters)")]
pub struct DispatchError {
    /// Characters fully typed before the failure
    pub typed: usize,
    #[source]
    pub source: InjectionError,
}

/// Type `text` into the focused window.
///
/// "\r\n" is normalised to "\n" first. `delay` is applied after every
/// character, and after every code unit of a Unicode-injected character.
pub fn dispatch<T, S>(
    table: &T,
    sink: &mut S,
    text: &str,
    layout_name: &str,
    delay: Delay,
) -> Result<DispatchReport, DispatchError>
where
    T: LayoutTable + ?Sized,
    S: InputSink + ?Sized,
{
    let layout = resolve_layout(table, layout_name);
    let text = text.replace("\r\n", "\n");

    let mut session = Session {
        table,
        sink,
        layout,
        delay,
        report: DispatchReport::default(),
    };

    for ch in text.chars() {
        session.type_char(ch).map_err(|source| DispatchError {
            typed: session.report.characters,
            source,
        })?;
    }

    Ok(session.report)
}

/// State of one dispatch; lives only for the call.
struct Session<'a, T: ?Sized, S: ?Sized> {
    table: &'a T,
    sink: &'a mut S,
    layout: LayoutHandle,
    delay: Delay,
    report: DispatchReport,
}

impl<T, S> Session<'_, T, S>
where
    T: LayoutTable + ?Sized,
    S: InputSink + ?Sized,
{
    fn type_char(&mut self, ch: char) -> Result<(), InjectionError> {
        if ch == '\n' {
            send_enter(self.table, self.sink, self.layout)?;
            self.sink.pace(self.delay);
            self.report.enters += 1;
        } else {
            match translate(self.table, ch, self.layout) {
                Ok(stroke) => {
                    send_keystroke(self.sink, &stroke)?;
                    self.sink.pace(self.delay);
                    self.report.keystrokes += 1;
                }
                Err(reason) => {
                    debug!("Typing {:?} as unicode: {}", ch, reason);
                    send_unicode(self.sink, ch, self.delay)?;
                    self.report.fallbacks += 1;
                }
            }
        }
        self.report.characters += 1;
        Ok(())
    }
}
