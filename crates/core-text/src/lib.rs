//! Line-oriented text buffer.
//!
//! The document is an ordered list of lines. Every external reference to a
//! line is 1-based (what the user types at a line-number prompt); storage is a
//! plain `Vec<String>` indexed from 0.
//!
//! Invariants:
//! * Positional mutations validate their argument and return
//!   `BufferError::InvalidLine` instead of clamping.
//! * `delete_at` may leave the buffer empty. Callers restore the one-blank-line
//!   sentinel through `ensure_not_empty` before the next frame is drawn.
//! * The sentinel is a placeholder, not content: it displays (and counts) as a
//!   single blank line, but the first insert or append replaces it, so typing
//!   one line into an empty document yields a one-line document. Both insertion
//!   points it offers (before and after line 1) land on line 1.

use thiserror::Error;

pub mod width;

pub use width::{TAB_STOP, display_rows, display_width, expand_tabs, truncate_to_width};

/// Errors produced by positional buffer mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The 1-based line number lies outside the range accepted by the operation.
    #[error("Invalid line number: {line}")]
    InvalidLine { line: usize, len: usize },
}

/// An ordered, mutable list of text lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
    placeholder: bool,
}

impl LineBuffer {
    /// Build a buffer from any sequence of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            placeholder: false,
        }
    }

    /// The empty-document sentinel: a single blank placeholder line.
    pub fn sentinel() -> Self {
        Self {
            lines: vec![String::new()],
            placeholder: true,
        }
    }

    /// True while the buffer shows only the empty-document sentinel.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Borrow a line by 1-based number.
    pub fn line(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Insert `text` so that it becomes line `line`. Accepts `1..=len + 1`.
    pub fn insert_at(&mut self, line: usize, text: impl Into<String>) -> Result<(), BufferError> {
        self.check_insert_position(line)?;
        if self.take_placeholder() {
            self.lines.push(text.into());
        } else {
            self.lines.insert(line - 1, text.into());
        }
        Ok(())
    }

    /// Remove line `line` and return its text. Accepts `1..=len`.
    pub fn delete_at(&mut self, line: usize) -> Result<String, BufferError> {
        self.check_line(line)?;
        self.placeholder = false;
        Ok(self.lines.remove(line - 1))
    }

    /// Overwrite line `line` in place and return the previous text. Accepts `1..=len`.
    pub fn replace_at(
        &mut self,
        line: usize,
        text: impl Into<String>,
    ) -> Result<String, BufferError> {
        self.check_line(line)?;
        self.placeholder = false;
        Ok(std::mem::replace(&mut self.lines[line - 1], text.into()))
    }

    /// Append a line after the last one.
    pub fn append(&mut self, text: impl Into<String>) {
        self.take_placeholder();
        self.lines.push(text.into());
    }

    /// Replace the whole document.
    pub fn load<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self.placeholder = false;
    }

    /// Restore the sentinel if the buffer became empty. Returns true when it did.
    pub fn ensure_not_empty(&mut self) -> bool {
        if self.lines.is_empty() {
            *self = Self::sentinel();
            return true;
        }
        false
    }

    /// Number of decimal digits in the line count (gutter width). Never below 1.
    pub fn gutter_width(&self) -> usize {
        digits(self.lines.len())
    }

    /// Validate `line` as an existing line number (`1..=len`).
    pub fn check_line(&self, line: usize) -> Result<(), BufferError> {
        if line == 0 || line > self.lines.len() {
            return Err(self.invalid(line));
        }
        Ok(())
    }

    /// Validate `line` as an insertion point (`1..=len + 1`).
    pub fn check_insert_position(&self, line: usize) -> Result<(), BufferError> {
        if line == 0 || line > self.lines.len() + 1 {
            return Err(self.invalid(line));
        }
        Ok(())
    }

    /// Drop the sentinel line. Returns true when there was one.
    fn take_placeholder(&mut self) -> bool {
        if !self.placeholder {
            return false;
        }
        self.lines.clear();
        self.placeholder = false;
        true
    }

    fn invalid(&self, line: usize) -> BufferError {
        BufferError::InvalidLine {
            line,
            len: self.lines.len(),
        }
    }
}

/// Count of decimal digits in `n` (`0` counts as one digit).
pub fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abc() -> LineBuffer {
        LineBuffer::from_lines(["a", "b", "c"])
    }

    #[test]
    fn sentinel_is_one_blank_line() {
        let b = LineBuffer::sentinel();
        assert_eq!(b.len(), 1);
        assert_eq!(b.line(1), Some(""));
    }

    #[test]
    fn insert_at_front_and_end() {
        let mut b = LineBuffer::from_lines(["a", "b"]);
        b.insert_at(1, "first").unwrap();
        assert_eq!(b.lines(), ["first", "a", "b"]);
        b.insert_at(4, "last").unwrap();
        assert_eq!(b.lines(), ["first", "a", "b", "last"]);
    }

    #[test]
    fn insert_rejects_zero_and_past_end() {
        let mut b = abc();
        assert_eq!(
            b.insert_at(0, "x"),
            Err(BufferError::InvalidLine { line: 0, len: 3 })
        );
        assert_eq!(
            b.insert_at(5, "x"),
            Err(BufferError::InvalidLine { line: 5, len: 3 })
        );
        assert_eq!(b, abc(), "failed insert leaves buffer untouched");
    }

    #[test]
    fn delete_and_replace_bounds() {
        let mut b = abc();
        assert!(b.delete_at(0).is_err());
        assert!(b.delete_at(4).is_err());
        assert!(b.replace_at(0, "x").is_err());
        assert!(b.replace_at(4, "x").is_err());
        assert_eq!(b.replace_at(2, "B").unwrap(), "b");
        assert_eq!(b.delete_at(3).unwrap(), "c");
        assert_eq!(b.lines(), ["a", "B"]);
    }

    #[test]
    fn first_line_replaces_sentinel() {
        let mut b = LineBuffer::sentinel();
        b.append("hello");
        assert_eq!(b.lines(), ["hello"]);
        assert!(!b.is_placeholder());

        let mut b = LineBuffer::sentinel();
        b.insert_at(1, "x").unwrap();
        assert_eq!(b.lines(), ["x"]);

        // After the shown line is the same as appending.
        let mut b = LineBuffer::sentinel();
        b.insert_at(2, "after").unwrap();
        assert_eq!(b.lines(), ["after"]);
        assert!(!b.is_placeholder());

        let mut b = LineBuffer::sentinel();
        assert_eq!(
            b.insert_at(3, "x"),
            Err(BufferError::InvalidLine { line: 3, len: 1 })
        );
        assert!(b.is_placeholder());

        let mut b = LineBuffer::sentinel();
        b.replace_at(1, "y").unwrap();
        assert_eq!(b.lines(), ["y"]);
        assert!(!b.is_placeholder());
    }

    #[test]
    fn real_blank_line_is_content() {
        let mut b = LineBuffer::from_lines([""]);
        b.append("x");
        assert_eq!(b.lines(), ["", "x"]);
    }

    #[test]
    fn delete_last_line_is_resolved_by_sentinel() {
        let mut b = LineBuffer::from_lines(["only"]);
        b.delete_at(1).unwrap();
        assert!(b.is_empty());
        assert!(b.ensure_not_empty());
        assert_eq!(b, LineBuffer::sentinel());
        assert!(!b.ensure_not_empty());
    }

    #[test]
    fn error_message_names_line() {
        let err = abc().delete_at(9).unwrap_err();
        assert_eq!(err.to_string(), "Invalid line number: 9");
    }

    #[test]
    fn gutter_width_tracks_digit_count() {
        assert_eq!(LineBuffer::sentinel().gutter_width(), 1);
        assert_eq!(LineBuffer::from_lines(vec![""; 9]).gutter_width(), 1);
        assert_eq!(LineBuffer::from_lines(vec![""; 10]).gutter_width(), 2);
        assert_eq!(LineBuffer::from_lines(vec![""; 100]).gutter_width(), 3);
        assert_eq!(LineBuffer::default().gutter_width(), 1);
    }

    proptest! {
        #[test]
        fn insert_then_delete_is_identity(
            lines in proptest::collection::vec("[a-z ]{0,8}", 0..20),
            pos_seed in any::<usize>(),
            text in "[a-z]{0,8}",
        ) {
            let original = LineBuffer::from_lines(lines.clone());
            let mut b = original.clone();
            let pos = pos_seed % (lines.len() + 1) + 1;
            b.insert_at(pos, text.clone()).unwrap();
            prop_assert_eq!(b.line(pos), Some(text.as_str()));
            prop_assert_eq!(b.delete_at(pos).unwrap(), text);
            prop_assert_eq!(b, original);
        }

        #[test]
        fn delete_then_sentinel_never_empty(
            lines in proptest::collection::vec("[a-z]{0,4}", 1..10),
            deletes in proptest::collection::vec(any::<usize>(), 0..15),
        ) {
            let mut b = LineBuffer::from_lines(lines);
            for seed in deletes {
                let pos = seed % b.len() + 1;
                b.delete_at(pos).unwrap();
                b.ensure_not_empty();
                prop_assert!(b.len() >= 1);
            }
        }
    }
}
