//! Command execution for Normal mode.
//!
//! Every handler runs its prompts, applies at most one mutation, sets the
//! feedback message, and returns a `CommandOutcome`. Failures local to a
//! command (bad line number, unreadable file, failed write, declined
//! confirmation) end as `Aborted` with feedback; only input-source errors
//! propagate as `Err`.

use crate::io_ops::{OpenFileResult, WriteFileResult, open_file, write_file};
use crate::prompt::{
    Confirmation, FILE_NAME_PROMPT, LINE_CONTENTS_PROMPT, confirm, prompt_line_number,
    prompt_text,
};

use super::command_parser::{CommandParser, ParsedCommand};
use anyhow::Result;
use core_config::InputConfig;
use core_events::InputSource;
use core_state::{EditorState, HELP_DOCUMENT, Mode};
use core_text::{BufferError, LineBuffer};
use std::path::{Path, PathBuf};

pub const DECLINED_FEEDBACK: &str = "ok then";
pub const OPEN_FAILED_FEEDBACK: &str = "Could not open file";
pub const WRITE_FAILED_FEEDBACK: &str = "fate";
pub const SCROLL_ENTERED_FEEDBACK: &str = "Scroll mode: arrows move, : exits";

/// How a single command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran (including no-op commands); keep looping.
    Applied,
    /// The command stopped early without mutating the buffer.
    Aborted,
    /// Leave the frame loop.
    Quit,
}

/// Parse `raw` and run the matching command against `state`.
pub fn execute_command(
    raw: &str,
    state: &mut EditorState,
    input: &mut dyn InputSource,
    limits: &InputConfig,
) -> Result<CommandOutcome> {
    let parsed = CommandParser::parse(raw);
    tracing::debug!(target: "runtime.command", command = ?parsed, "execute");
    let outcome = match parsed {
        ParsedCommand::Quit => handle_quit(state, input)?,
        ParsedCommand::ForceQuit => CommandOutcome::Quit,
        ParsedCommand::Append => handle_append(state, input, limits)?,
        ParsedCommand::InsertAt => handle_insert_at(state, input, limits)?,
        ParsedCommand::EditLine => handle_edit_line(state, input, limits)?,
        ParsedCommand::DeleteLine => handle_delete_line(state, input, limits)?,
        ParsedCommand::Help => handle_replace(
            state,
            input,
            LineBuffer::from_lines(HELP_DOCUMENT.iter().copied()),
            "Opened helpfile",
        )?,
        ParsedCommand::Clear => handle_replace(
            state,
            input,
            LineBuffer::sentinel(),
            "I hope this is what you wanted.",
        )?,
        ParsedCommand::Open => handle_open(state, input, limits)?,
        ParsedCommand::Write => handle_write(state, input, limits)?,
        ParsedCommand::Scroll => {
            state.mode = Mode::Scroll;
            state.set_feedback(SCROLL_ENTERED_FEEDBACK);
            CommandOutcome::Applied
        }
        ParsedCommand::Unknown(raw) => {
            state.set_feedback(raw);
            CommandOutcome::Applied
        }
    };
    tracing::debug!(target: "runtime.command", ?outcome, dirty = state.dirty, lines = state.buffer.len(), "executed");
    Ok(outcome)
}

fn declined(state: &mut EditorState) -> CommandOutcome {
    state.set_feedback(DECLINED_FEEDBACK);
    CommandOutcome::Aborted
}

fn rejected(state: &mut EditorState, err: BufferError) -> CommandOutcome {
    tracing::warn!(target: "runtime.command", %err, "line_number_rejected");
    state.set_feedback(err.to_string());
    CommandOutcome::Aborted
}

fn handle_quit(state: &mut EditorState, input: &mut dyn InputSource) -> Result<CommandOutcome> {
    if state.dirty && confirm(input, state)? == Confirmation::Declined {
        return Ok(declined(state));
    }
    Ok(CommandOutcome::Quit)
}

fn handle_append(
    state: &mut EditorState,
    input: &mut dyn InputSource,
    limits: &InputConfig,
) -> Result<CommandOutcome> {
    let text = prompt_text(input, state, LINE_CONTENTS_PROMPT, limits.line_len)?;
    state.buffer.append(text);
    state.mark_edited();
    state.set_feedback("Added 1 line");
    Ok(CommandOutcome::Applied)
}

fn handle_insert_at(
    state: &mut EditorState,
    input: &mut dyn InputSource,
    limits: &InputConfig,
) -> Result<CommandOutcome> {
    let line = prompt_line_number(input, state, limits)?;
    if let Err(e) = state.buffer.check_insert_position(line) {
        return Ok(rejected(state, e));
    }
    let text = prompt_text(input, state, LINE_CONTENTS_PROMPT, limits.line_len)?;
    Ok(match state.buffer.insert_at(line, text) {
        Ok(()) => {
            state.mark_edited();
            state.set_feedback("Inserted 1 line");
            CommandOutcome::Applied
        }
        Err(e) => rejected(state, e),
    })
}

fn handle_edit_line(
    state: &mut EditorState,
    input: &mut dyn InputSource,
    limits: &InputConfig,
) -> Result<CommandOutcome> {
    let line = prompt_line_number(input, state, limits)?;
    if let Err(e) = state.buffer.check_line(line) {
        return Ok(rejected(state, e));
    }
    let text = prompt_text(input, state, LINE_CONTENTS_PROMPT, limits.line_len)?;
    Ok(match state.buffer.replace_at(line, text) {
        Ok(_) => {
            state.mark_edited();
            state.set_feedback("Changed 1 line");
            CommandOutcome::Applied
        }
        Err(e) => rejected(state, e),
    })
}

fn handle_delete_line(
    state: &mut EditorState,
    input: &mut dyn InputSource,
    limits: &InputConfig,
) -> Result<CommandOutcome> {
    let line = prompt_line_number(input, state, limits)?;
    Ok(match state.buffer.delete_at(line) {
        Ok(_) => {
            state.mark_edited();
            state.set_feedback("Removed 1 line");
            CommandOutcome::Applied
        }
        Err(e) => rejected(state, e),
    })
}

fn handle_replace(
    state: &mut EditorState,
    input: &mut dyn InputSource,
    replacement: LineBuffer,
    feedback: &str,
) -> Result<CommandOutcome> {
    if confirm(input, state)? == Confirmation::Declined {
        return Ok(declined(state));
    }
    state.replace_buffer(replacement);
    state.set_feedback(feedback);
    Ok(CommandOutcome::Applied)
}

fn handle_open(
    state: &mut EditorState,
    input: &mut dyn InputSource,
    limits: &InputConfig,
) -> Result<CommandOutcome> {
    let name = prompt_text(input, state, FILE_NAME_PROMPT, limits.path_len)?;
    Ok(open_into(state, Path::new(&name)))
}

/// Load `path` into `state`, leaving state untouched on failure.
pub fn open_into(state: &mut EditorState, path: &Path) -> CommandOutcome {
    match open_file(path) {
        OpenFileResult::Success(s) => {
            tracing::info!(target: "runtime.command", file = %s.file_name.display(), lines = s.lines.len(), "opened");
            state.adopt_file(s.file_name, s.lines);
            state.set_feedback("Opened file");
            CommandOutcome::Applied
        }
        OpenFileResult::Error => {
            state.set_feedback(OPEN_FAILED_FEEDBACK);
            CommandOutcome::Aborted
        }
    }
}

fn handle_write(
    state: &mut EditorState,
    input: &mut dyn InputSource,
    limits: &InputConfig,
) -> Result<CommandOutcome> {
    let path = match state.file_name.clone() {
        Some(p) => p,
        None => PathBuf::from(prompt_text(
            input,
            state,
            FILE_NAME_PROMPT,
            limits.path_len,
        )?),
    };
    Ok(match write_file(state.buffer.lines(), &path) {
        WriteFileResult::Success => {
            tracing::info!(target: "runtime.command", file = %path.display(), lines = state.buffer.len(), "saved");
            state.mark_saved(path);
            state.set_feedback("Saved.");
            CommandOutcome::Applied
        }
        WriteFileResult::Error => {
            state.set_feedback(WRITE_FAILED_FEEDBACK);
            CommandOutcome::Aborted
        }
    })
}
