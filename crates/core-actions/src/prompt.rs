//! Follow-up prompts used by commands.
//!
//! Each prompt draws its message on the feedback line, then reads one line from
//! the command row. Commands compose these instead of talking to the terminal.

use anyhow::Result;
use core_config::InputConfig;
use core_events::InputSource;
use core_state::EditorState;

pub const CONFIRM_PROMPT: &str = "Are you sure? All contents will be lost. [Y/N]";
pub const LINE_CONTENTS_PROMPT: &str = "Enter line contents:";
pub const LINE_NUMBER_PROMPT: &str = "Enter line number:";
pub const FILE_NAME_PROMPT: &str = "Enter file name:";

/// Answer to a yes/no gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

/// Show `message` and read a line of at most `max_len` characters.
pub fn prompt_text(
    input: &mut dyn InputSource,
    state: &EditorState,
    message: &str,
    max_len: usize,
) -> Result<String> {
    input.show_feedback(message, &state.file_label())?;
    input.read_line(max_len)
}

/// Ask for a 1-based line number. Anything unparsable comes back as 0.
pub fn prompt_line_number(
    input: &mut dyn InputSource,
    state: &EditorState,
    limits: &InputConfig,
) -> Result<usize> {
    let raw = prompt_text(input, state, LINE_NUMBER_PROMPT, limits.number_len)?;
    Ok(parse_line_number(&raw))
}

/// Destructive-action gate. Only `y` or `Y` accepts.
pub fn confirm(input: &mut dyn InputSource, state: &EditorState) -> Result<Confirmation> {
    let answer = prompt_text(input, state, CONFIRM_PROMPT, InputConfig::CONFIRM_LEN)?;
    Ok(match answer.as_str() {
        "y" | "Y" => Confirmation::Accepted,
        _ => Confirmation::Declined,
    })
}

/// Unsigned decimal parse. Empty input, any non-digit, or overflow yields 0.
pub fn parse_line_number(raw: &str) -> usize {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    raw.parse().unwrap_or(0)
}
