//! Blocking crossterm input for the editor.
//!
//! `TerminalInput` implements `InputSource` against the real terminal. Lines
//! are typed on the bottom (command) row with live echo; single keys are read
//! for scroll mode. Only key presses are consumed; resize, mouse and focus
//! events are skipped.

mod key_map;
pub mod line_editor;

pub use line_editor::{LineEdit, LineEditor};

use anyhow::Result;
use core_events::{InputSource, KeyEvent};
use core_render::{FrameContext, Writer, paint_feedback};
use crossterm::event::{self, Event as CEvent};
use crossterm::terminal;

#[inline]
pub(crate) fn log_line_submitted(line: &str, max_len: usize) {
    tracing::trace!(target: "input.line", line_len = line.chars().count(), max_len, "line_submitted");
}

#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    fn frame_context() -> Result<FrameContext<'static>> {
        let (columns, rows) = terminal::size()?;
        Ok(FrameContext {
            title: "",
            columns,
            rows,
        })
    }

    /// Block until the next key press the editor understands.
    fn next_key() -> Result<KeyEvent> {
        loop {
            if let CEvent::Key(raw) = event::read()? {
                if let Some(key) = key_map::map_key_event(&raw) {
                    return Ok(key);
                }
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn show_feedback(&mut self, message: &str, file_label: &str) -> Result<()> {
        let mut w = Writer::new();
        paint_feedback(&mut w, message, file_label, Self::frame_context()?);
        w.flush()
    }

    fn read_line(&mut self, max_len: usize) -> Result<String> {
        let row = Self::frame_context()?.command_row().unwrap_or(0);
        let mut editor = LineEditor::new(max_len);
        loop {
            match editor.apply(Self::next_key()?) {
                LineEdit::Submit => break,
                LineEdit::Ignored => {}
                LineEdit::Echo(_) | LineEdit::Erase => {
                    let mut w = Writer::new();
                    w.clear_row(row);
                    w.print(editor.text());
                    w.flush()?;
                }
            }
        }
        let line = editor.into_text();
        log_line_submitted(&line, max_len);
        Ok(line)
    }

    fn read_key(&mut self) -> Result<KeyEvent> {
        let key = Self::next_key()?;
        tracing::trace!(target: "input.key", key = %key, "key_read");
        Ok(key)
    }
}
