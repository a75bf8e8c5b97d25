//! Editing state machine: command processing, scroll control, and the
//! prompt/file-IO helpers they compose.
//!
//! Entry point for the frame loop is [`dispatcher::step`], which reads exactly
//! one unit of input for the current mode and applies it to `EditorState`.

pub mod dispatcher;
pub mod io_ops;
pub mod prompt;

pub use dispatcher::command::CommandOutcome;
pub use dispatcher::command_parser::{CommandParser, ParsedCommand};
pub use dispatcher::scroll::ScrollOutcome;
pub use dispatcher::{FrameOutcome, step};
pub use prompt::Confirmation;
