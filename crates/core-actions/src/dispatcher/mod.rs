//! Per-frame input dispatch.
//!
//! * `command` - Normal mode command execution (`:q`, `:n`, `:w`, ...)
//! * `command_parser` - raw command line to `ParsedCommand`
//! * `scroll` - Scroll mode key handling
//!
//! `step` reads exactly one unit of input for the current mode (a whole
//! command line in Normal mode, one key in Scroll mode), applies it, and tells
//! the frame loop whether to redraw, wait for more input, or quit.

use anyhow::Result;
use core_config::InputConfig;
use core_events::InputSource;
use core_state::{EditorState, Mode};

pub mod command;
pub mod command_parser;
pub mod scroll;

use command::{CommandOutcome, execute_command};
use scroll::{ScrollOutcome, handle_scroll_key};

/// What the frame loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// State may have changed; render a new frame.
    Redraw,
    /// Nothing changed; read more input without redrawing.
    Idle,
    /// Leave the loop.
    Quit,
}

/// Read and apply one unit of input for the current mode.
pub fn step(
    state: &mut EditorState,
    input: &mut dyn InputSource,
    limits: &InputConfig,
) -> Result<FrameOutcome> {
    match state.mode {
        Mode::Normal => {
            let raw = input.read_line(limits.command_len)?;
            Ok(match execute_command(&raw, state, input, limits)? {
                CommandOutcome::Quit => FrameOutcome::Quit,
                CommandOutcome::Applied | CommandOutcome::Aborted => FrameOutcome::Redraw,
            })
        }
        Mode::Scroll => {
            let key = input.read_key()?;
            Ok(match handle_scroll_key(key, state) {
                ScrollOutcome::Unchanged => FrameOutcome::Idle,
                ScrollOutcome::Moved | ScrollOutcome::Exited => FrameOutcome::Redraw,
            })
        }
    }
}
