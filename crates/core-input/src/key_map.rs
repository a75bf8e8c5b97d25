use core_events::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind,
    KeyModifiers as CMods,
};

/// Map a crossterm key event into an editor key event.
///
/// Releases are dropped so each physical press is seen once on terminals that
/// report both edges. Keys the editor never binds (function keys, media keys)
/// return `None`.
pub(crate) fn map_key_event(event: &CKeyEvent) -> Option<KeyEvent> {
    if event.kind == CKeyEventKind::Release {
        return None;
    }
    let code = map_key_code(&event.code)?;
    Some(KeyEvent::new(code, map_mods(event.modifiers)))
}

pub(crate) fn map_key_code(code: &CKeyCode) -> Option<KeyCode> {
    let mapped = match code {
        CKeyCode::Char(c) => KeyCode::Char(*c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab | CKeyCode::BackTab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    Some(mapped)
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn ct(code: CKeyCode, mods: CMods, kind: CKeyEventKind) -> CKeyEvent {
        CKeyEvent {
            code,
            modifiers: mods,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_and_colon_map() {
        for (c, want) in [
            (CKeyCode::Up, KeyCode::Up),
            (CKeyCode::Down, KeyCode::Down),
            (CKeyCode::Left, KeyCode::Left),
            (CKeyCode::Right, KeyCode::Right),
            (CKeyCode::Char(':'), KeyCode::Char(':')),
        ] {
            let ev = map_key_event(&ct(c, CMods::NONE, CKeyEventKind::Press)).unwrap();
            assert_eq!(ev, KeyEvent::plain(want));
        }
    }

    #[test]
    fn release_is_dropped() {
        assert!(map_key_event(&ct(CKeyCode::Up, CMods::NONE, CKeyEventKind::Release)).is_none());
    }

    #[test]
    fn repeat_counts_as_press() {
        assert!(map_key_event(&ct(CKeyCode::Down, CMods::NONE, CKeyEventKind::Repeat)).is_some());
    }

    #[test]
    fn unbound_keys_are_none() {
        assert_eq!(map_key_code(&CKeyCode::F(5)), None);
        assert_eq!(map_key_code(&CKeyCode::Home), None);
    }

    #[test]
    fn modifiers_translate() {
        let m = map_mods(CMods::CONTROL | CMods::SHIFT);
        assert!(m.contains(KeyModifiers::CTRL));
        assert!(m.contains(KeyModifiers::SHIFT));
        assert!(!m.contains(KeyModifiers::ALT));
    }
}
