//! Single-line entry on the command row.
//!
//! Printable characters are appended until `max_len` characters are held,
//! Backspace removes the last one, Enter submits. Everything else, including
//! control chords, is ignored.

use core_events::{KeyCode, KeyEvent, KeyModifiers};

/// What the terminal needs to do after a key was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Echo this character at the cursor.
    Echo(char),
    /// Erase the character left of the cursor.
    Erase,
    /// Key had no effect.
    Ignored,
    /// Enter pressed; the line is complete.
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEditor {
    text: String,
    chars: usize,
    max_len: usize,
}

impl LineEditor {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            chars: 0,
            max_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn apply(&mut self, key: KeyEvent) -> LineEdit {
        match key.code {
            KeyCode::Enter => LineEdit::Submit,
            KeyCode::Backspace => match self.text.pop() {
                Some(_) => {
                    self.chars -= 1;
                    LineEdit::Erase
                }
                None => LineEdit::Ignored,
            },
            KeyCode::Char(c)
                if !c.is_control()
                    && !key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT)
                    && self.chars < self.max_len =>
            {
                self.text.push(c);
                self.chars += 1;
                LineEdit::Echo(c)
            }
            _ => LineEdit::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(ed: &mut LineEditor, keys: &[KeyCode]) -> Vec<LineEdit> {
        keys.iter().map(|k| ed.apply(KeyEvent::plain(*k))).collect()
    }

    #[test]
    fn typed_text_is_collected() {
        let mut ed = LineEditor::new(25);
        let out = feed(
            &mut ed,
            &[KeyCode::Char(':'), KeyCode::Char('w'), KeyCode::Enter],
        );
        assert_eq!(
            out,
            [LineEdit::Echo(':'), LineEdit::Echo('w'), LineEdit::Submit]
        );
        assert_eq!(ed.into_text(), ":w");
    }

    #[test]
    fn backspace_erases_and_stops_at_empty() {
        let mut ed = LineEditor::new(5);
        let out = feed(
            &mut ed,
            &[KeyCode::Char('a'), KeyCode::Backspace, KeyCode::Backspace],
        );
        assert_eq!(out, [LineEdit::Echo('a'), LineEdit::Erase, LineEdit::Ignored]);
        assert_eq!(ed.text(), "");
    }

    #[test]
    fn limit_is_in_characters() {
        let mut ed = LineEditor::new(2);
        let out = feed(
            &mut ed,
            &[KeyCode::Char('é'), KeyCode::Char('日'), KeyCode::Char('x')],
        );
        assert_eq!(out[2], LineEdit::Ignored);
        assert_eq!(ed.text(), "é日");
        // Room again after an erase.
        assert_eq!(ed.apply(KeyEvent::plain(KeyCode::Backspace)), LineEdit::Erase);
        assert_eq!(ed.apply(KeyEvent::plain(KeyCode::Char('x'))), LineEdit::Echo('x'));
    }

    #[test]
    fn control_chords_and_navigation_are_ignored() {
        let mut ed = LineEditor::new(10);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CTRL);
        assert_eq!(ed.apply(ctrl_c), LineEdit::Ignored);
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(ed.apply(shifted), LineEdit::Echo('A'));
        for k in [KeyCode::Up, KeyCode::Left, KeyCode::Esc, KeyCode::Tab] {
            assert_eq!(ed.apply(KeyEvent::plain(k)), LineEdit::Ignored);
        }
        assert_eq!(ed.text(), "A");
    }

    #[test]
    fn zero_limit_accepts_nothing() {
        let mut ed = LineEditor::new(0);
        assert_eq!(ed.apply(KeyEvent::plain(KeyCode::Char('a'))), LineEdit::Ignored);
        assert_eq!(ed.apply(KeyEvent::plain(KeyCode::Enter)), LineEdit::Submit);
    }
}
