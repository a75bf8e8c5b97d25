//! Headless input source replaying a fixed script.
//!
//! Lines are truncated to the caller's `max_len` the same way the terminal line
//! editor stops accepting characters, so a scripted "yes" at a one-character
//! confirmation prompt arrives as "y".

use crate::{InputSource, KeyCode, KeyEvent};
use anyhow::{Result, bail};
use std::collections::VecDeque;

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptItem {
    Line(String),
    Key(KeyEvent),
}

/// Replays queued lines and keys; records every feedback message drawn.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    items: VecDeque<ScriptItem>,
    shown: Vec<String>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue each string as a typed line.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut s = Self::new();
        for l in lines {
            s.push_line(l);
        }
        s
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.items.push_back(ScriptItem::Line(line.into()));
        self
    }

    pub fn push_key(&mut self, code: KeyCode) -> &mut Self {
        self.items.push_back(ScriptItem::Key(KeyEvent::plain(code)));
        self
    }

    /// Items not yet consumed.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// Every message passed to `show_feedback`, oldest first.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }
}

impl InputSource for ScriptedInput {
    fn show_feedback(&mut self, message: &str, _file_label: &str) -> Result<()> {
        self.shown.push(message.to_string());
        Ok(())
    }

    fn read_line(&mut self, max_len: usize) -> Result<String> {
        match self.items.pop_front() {
            Some(ScriptItem::Line(l)) => Ok(l.chars().take(max_len).collect()),
            Some(ScriptItem::Key(k)) => bail!("script expected a line, found key {k}"),
            None => bail!("input script exhausted"),
        }
    }

    fn read_key(&mut self) -> Result<KeyEvent> {
        match self.items.pop_front() {
            Some(ScriptItem::Key(k)) => Ok(k),
            Some(ScriptItem::Line(l)) => bail!("script expected a key, found line {l:?}"),
            None => bail!("input script exhausted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_truncated_to_limit() {
        let mut s = ScriptedInput::lines(["yes"]);
        assert_eq!(s.read_line(1).unwrap(), "y");
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let mut s = ScriptedInput::new();
        s.push_key(KeyCode::Up);
        assert!(s.read_line(10).is_err());
        assert!(s.read_key().is_err(), "exhausted");
    }

    #[test]
    fn records_feedback() {
        let mut s = ScriptedInput::new();
        s.show_feedback("Enter line number:", "None").unwrap();
        assert_eq!(s.shown(), ["Enter line number:"]);
    }
}
