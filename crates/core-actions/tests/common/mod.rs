#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{FrameOutcome, step};
use core_config::InputConfig;
use core_events::ScriptedInput;
use core_state::EditorState;

/// Fresh session exactly as the binary builds it.
pub fn fresh() -> EditorState {
    EditorState::new("Type :h to open internal help file")
}

/// Session preloaded with `lines` (still unsaved).
pub fn with_lines(lines: &[&str]) -> EditorState {
    let mut st = fresh();
    st.buffer.load(lines.iter().copied());
    st
}

/// Drive frames like the binary does until the script runs out or a quit is
/// returned. Returns every frame outcome in order.
pub fn drive(state: &mut EditorState, input: &mut ScriptedInput) -> Vec<FrameOutcome> {
    drive_with(state, input, &InputConfig::default())
}

pub fn drive_with(
    state: &mut EditorState,
    input: &mut ScriptedInput,
    limits: &InputConfig,
) -> Vec<FrameOutcome> {
    let mut outcomes = Vec::new();
    while input.remaining() > 0 {
        state.begin_frame();
        let outcome = step(state, input, limits).expect("scripted step failed");
        outcomes.push(outcome);
        if outcome == FrameOutcome::Quit {
            break;
        }
    }
    state.begin_frame();
    outcomes
}

/// Convenience: run a script made only of typed lines.
pub fn type_lines(state: &mut EditorState, lines: &[&str]) -> Vec<FrameOutcome> {
    let mut input = ScriptedInput::lines(lines.iter().copied());
    drive(state, &mut input)
}
