//! Scroll mode key handling.
//!
//! The only state is `EditorState::scroll_offset`, kept in `[0, len - 1]` by
//! every transition. `Unchanged` tells the frame loop that nothing moved, so
//! it can skip the redraw and read the next key.

use core_events::{KeyCode, KeyEvent};
use core_state::{EditorState, Mode};

pub const SCROLL_EXITED_FEEDBACK: &str = "escaped scroll mode";

/// Result of one scroll-mode key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The offset changed.
    Moved,
    /// Nothing happened (edge reached or unbound key).
    Unchanged,
    /// Back to Normal mode.
    Exited,
}

pub fn handle_scroll_key(key: KeyEvent, state: &mut EditorState) -> ScrollOutcome {
    let before = state.scroll_offset;
    let last = state.max_scroll_offset();
    match key.code {
        KeyCode::Left => state.scroll_offset = 0,
        KeyCode::Right => state.scroll_offset = last,
        KeyCode::Up if before > 0 => state.scroll_offset = before - 1,
        KeyCode::Down if before < last => state.scroll_offset = before + 1,
        KeyCode::Char(':') => {
            state.mode = Mode::Normal;
            state.set_feedback(SCROLL_EXITED_FEEDBACK);
            tracing::debug!(target: "runtime.scroll", offset = before, "scroll_exit");
            return ScrollOutcome::Exited;
        }
        _ => {}
    }
    if state.scroll_offset == before {
        return ScrollOutcome::Unchanged;
    }
    tracing::trace!(target: "runtime.scroll", from = before, to = state.scroll_offset, "scroll");
    ScrollOutcome::Moved
}
