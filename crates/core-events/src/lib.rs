//! Input event types and the input-source seam.
//!
//! The editor reads input in exactly two shapes: a whole line typed on the
//! command row (Normal mode commands and every follow-up prompt) or one key
//! press (Scroll mode). `InputSource` abstracts both, plus drawing the prompt
//! text on the feedback line, so the command processor can run against a real
//! terminal or against `ScriptedInput` in tests.
//!
//! All reads block. There is no timeout and no async producer; the frame loop
//! owns the only thread of control.

use std::fmt;

mod scripted;
pub use scripted::{ScriptItem, ScriptedInput};

/// Blocking source of user input.
pub trait InputSource {
    /// Draw `message` on the feedback line with `file_label` right-aligned.
    fn show_feedback(&mut self, message: &str, file_label: &str) -> anyhow::Result<()>;
    /// Read one line from the command row, keeping at most `max_len` characters.
    fn read_line(&mut self, max_len: usize) -> anyhow::Result<String>;
    /// Block until a single key press arrives.
    fn read_key(&mut self) -> anyhow::Result<KeyEvent>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Key press without modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }
}

/// Logical key representations consumed by the scroll controller and line editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}
