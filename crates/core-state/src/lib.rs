//! Session state: the line buffer plus the editor metadata every frame reads.
//!
//! A single `EditorState` is built at startup and passed by `&mut` into the
//! command processor, the scroll controller, and (by `&`) the renderer. No
//! component keeps its own copy of the buffer or the scroll offset.
//!
//! Invariants (hold after `begin_frame` returns):
//! * The buffer holds at least one line (the blank sentinel when emptied).
//! * `scroll_offset < buffer.len()`.
//!
//! Dirty tracking:
//! * Starts `true`: a fresh session has never been written.
//! * Every buffer mutation routed through `mark_edited` / `replace_buffer`
//!   sets it; a successful write or open clears it.

use core_text::LineBuffer;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Right-hand feedback label shown while no file is associated.
pub const NO_FILE_LABEL: &str = "None";

/// Built-in help document loaded by `:h`.
pub const HELP_DOCUMENT: &[&str] = &[
    ":h - help",
    ":x - clear buffer",
    ":q - quit TINR",
    ":q! - quit without warning",
    ":n - new line",
    ":na - new line at",
    ":e - edit line",
    ":d - delete line",
    ":w - write",
    ":o! - open",
    ":s - scroll mode (arrows move, : exits)",
];

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Colon-commands are read as full lines and dispatched.
    #[default]
    Normal,
    /// Single key presses move the viewport.
    Scroll,
}

/// Top-level editor state container.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub buffer: LineBuffer,
    pub file_name: Option<PathBuf>,
    pub dirty: bool,
    pub mode: Mode,
    pub scroll_offset: usize,
    feedback: String,
}

impl EditorState {
    /// Fresh session: sentinel buffer, no file, unsaved, Normal mode, offset 0.
    pub fn new(initial_feedback: impl Into<String>) -> Self {
        Self {
            buffer: LineBuffer::sentinel(),
            file_name: None,
            dirty: true,
            mode: Mode::Normal,
            scroll_offset: 0,
            feedback: initial_feedback.into(),
        }
    }

    /// Re-establish the frame invariants before rendering.
    pub fn begin_frame(&mut self) {
        if self.buffer.ensure_not_empty() {
            tracing::trace!(target: "runtime", "sentinel_restored");
        }
        self.clamp_scroll();
    }

    /// Clamp the scroll offset into `[0, len - 1]`. Returns true if it moved.
    pub fn clamp_scroll(&mut self) -> bool {
        let max = self.max_scroll_offset();
        if self.scroll_offset > max {
            tracing::trace!(target: "runtime", from = self.scroll_offset, to = max, "scroll_clamped");
            self.scroll_offset = max;
            return true;
        }
        false
    }

    /// Largest valid scroll offset for the current buffer.
    pub fn max_scroll_offset(&self) -> usize {
        self.buffer.len().saturating_sub(1)
    }

    /// Record that the buffer content changed.
    pub fn mark_edited(&mut self) {
        self.dirty = true;
    }

    /// Swap in a whole new document (help, clear). The result counts as an edit
    /// and is shown from its first line.
    pub fn replace_buffer(&mut self, buffer: LineBuffer) {
        self.buffer = buffer;
        self.mark_edited();
        self.scroll_offset = 0;
    }

    /// Adopt a document just read from `path`; it matches disk, so it is clean.
    pub fn adopt_file(&mut self, path: PathBuf, lines: Vec<String>) {
        self.buffer.load(lines);
        self.buffer.ensure_not_empty();
        self.file_name = Some(path);
        self.dirty = false;
        self.scroll_offset = 0;
    }

    /// Note a successful write to `path`.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.file_name = Some(path);
        self.dirty = false;
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn set_feedback<S: Into<String>>(&mut self, msg: S) {
        self.feedback = msg.into();
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Text shown right-aligned on the feedback line.
    pub fn file_label(&self) -> Cow<'_, str> {
        match &self.file_name {
            Some(p) => p.to_string_lossy(),
            None => Cow::Borrowed(NO_FILE_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_state() {
        let st = EditorState::new("tip");
        assert_eq!(st.buffer, LineBuffer::sentinel());
        assert!(st.file_name.is_none());
        assert!(st.dirty, "never-written session counts as unsaved");
        assert_eq!(st.mode, Mode::Normal);
        assert_eq!(st.scroll_offset, 0);
        assert_eq!(st.feedback(), "tip");
        assert_eq!(st.file_label(), "None");
    }

    #[test]
    fn begin_frame_restores_sentinel_and_clamps() {
        let mut st = EditorState::new("");
        st.buffer.load(["a", "b", "c"]);
        st.scroll_offset = 2;
        st.buffer.delete_at(3).unwrap();
        st.buffer.delete_at(2).unwrap();
        st.buffer.delete_at(1).unwrap();
        st.begin_frame();
        assert_eq!(st.buffer.len(), 1);
        assert_eq!(st.scroll_offset, 0);
    }

    #[test]
    fn replace_buffer_marks_dirty_and_rewinds() {
        let mut st = EditorState::new("");
        st.buffer.load(vec!["x"; 30]);
        st.scroll_offset = 5;
        st.dirty = false;
        st.replace_buffer(LineBuffer::from_lines(HELP_DOCUMENT.iter().copied()));
        assert!(st.dirty);
        assert_eq!(st.scroll_offset, 0, "new document starts at its first line");
    }

    #[test]
    fn adopt_file_is_clean_and_named() {
        let mut st = EditorState::new("");
        st.adopt_file(PathBuf::from("notes.txt"), vec![]);
        assert!(!st.dirty);
        assert_eq!(st.buffer.len(), 1, "empty file still yields the sentinel");
        assert_eq!(st.file_label(), "notes.txt");
    }

    #[test]
    fn help_lists_every_command() {
        for cmd in [
            ":h", ":x", ":q", ":q!", ":n", ":na", ":e", ":d", ":w", ":o!", ":s",
        ] {
            let prefix = format!("{cmd} ");
            assert!(
                HELP_DOCUMENT.iter().any(|l| l.starts_with(&prefix)),
                "help missing {cmd}"
            );
        }
    }
}
