//! Terminal writer abstraction.
//!
//! A frame is assembled as an ordered list of primitive commands and flushed
//! once, so the terminal never shows a half-drawn screen between redraws.
//!
//! Invariants:
//! * Commands preserve ordering; no flushing mid-frame.
//! * All positions are absolute (0,0) origin; caller ensures bounds.
//! * A `ClearLine` is always preceded by a `MoveTo(0, y)` for the row it wipes.
//! * Attribute changes are scoped: every styled run ends with `ResetAttributes`.

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{Write, stdout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    ClearLine,
    Print(String),
    SetAttribute(Attribute),
    ResetAttributes,
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    /// Move to the start of row `y` and wipe it.
    pub fn clear_row(&mut self, y: u16) {
        self.cmds.push(Command::MoveTo(0, y));
        self.cmds.push(Command::ClearLine);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn set_attribute(&mut self, attr: Attribute) {
        self.cmds.push(Command::SetAttribute(attr));
    }
    pub fn reset_attributes(&mut self) {
        self.cmds.push(Command::ResetAttributes);
    }

    /// Print `text` wrapped in the given attributes.
    pub fn print_styled<S: Into<String>>(&mut self, attrs: &[Attribute], text: S) {
        for attr in attrs {
            self.set_attribute(*attr);
        }
        self.print(text);
        self.reset_attributes();
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Concatenated printable text, ignoring positioning and styling.
    pub fn printed_text(&self) -> String {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                Command::Print(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => {
                    queue!(out, MoveTo(x, y))?;
                }
                Command::ClearLine => {
                    queue!(out, Clear(ClearType::CurrentLine))?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
                Command::SetAttribute(attr) => {
                    queue!(out, SetAttribute(attr))?;
                }
                Command::ResetAttributes => {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn flush(self) -> Result<()> {
        let mut out = stdout();
        self.flush_to(&mut out)
    }
}
