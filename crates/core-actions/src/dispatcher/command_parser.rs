//! Command token classification.
//!
//! Converts the raw line typed in Normal mode into a `ParsedCommand`. Matching
//! is exact and case-sensitive: `:q` and `:q!` are distinct tokens, `:n` does
//! not match `:na`, and surrounding whitespace makes a token unknown. Each raw
//! line maps to exactly one variant, so a frame can never run two commands.
//!
//! No side effects here; pure classification.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// `:q` quit, confirming first when unsaved.
    Quit,
    /// `:q!` quit unconditionally.
    ForceQuit,
    /// `:n` append a line at the end.
    Append,
    /// `:na` insert a line at a given number.
    InsertAt,
    /// `:e` replace a line.
    EditLine,
    /// `:d` delete a line.
    DeleteLine,
    /// `:h` load the help document.
    Help,
    /// `:x` clear the buffer.
    Clear,
    /// `:o!` open a file.
    Open,
    /// `:w` write the buffer.
    Write,
    /// `:s` enter scroll mode.
    Scroll,
    /// Anything else, carrying the raw text for echo.
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        match raw {
            ":q" => ParsedCommand::Quit,
            ":q!" => ParsedCommand::ForceQuit,
            ":n" => ParsedCommand::Append,
            ":na" => ParsedCommand::InsertAt,
            ":e" => ParsedCommand::EditLine,
            ":d" => ParsedCommand::DeleteLine,
            ":h" => ParsedCommand::Help,
            ":x" => ParsedCommand::Clear,
            ":o!" => ParsedCommand::Open,
            ":w" => ParsedCommand::Write,
            ":s" => ParsedCommand::Scroll,
            other => ParsedCommand::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_vocabulary() {
        let table = [
            (":q", ParsedCommand::Quit),
            (":q!", ParsedCommand::ForceQuit),
            (":n", ParsedCommand::Append),
            (":na", ParsedCommand::InsertAt),
            (":e", ParsedCommand::EditLine),
            (":d", ParsedCommand::DeleteLine),
            (":h", ParsedCommand::Help),
            (":x", ParsedCommand::Clear),
            (":o!", ParsedCommand::Open),
            (":w", ParsedCommand::Write),
            (":s", ParsedCommand::Scroll),
        ];
        for (raw, expected) in table {
            assert_eq!(CommandParser::parse(raw), expected, "{raw}");
        }
    }

    #[test]
    fn parse_is_exact() {
        for raw in [":Q", " :q", ":q ", ":o", ":wq", "q", "", ":"] {
            assert_eq!(
                CommandParser::parse(raw),
                ParsedCommand::Unknown(raw.to_string()),
                "{raw:?}"
            );
        }
    }
}
