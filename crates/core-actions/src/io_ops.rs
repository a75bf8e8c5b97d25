//! File IO helpers for `:o!`, `:w`, and the startup path argument.
//!
//! Synchronous and minimal. Files are plain text: one buffer line per file
//! line, each terminated by `\n`. Reading splits on line boundaries (a `\r\n`
//! terminator is accepted and stripped), so a buffer without embedded
//! newlines survives a write/read round-trip exactly.

use std::path::{Path, PathBuf};

/// Result of attempting to open a file.
#[derive(Debug)]
pub enum OpenFileResult {
    Success(OpenSuccess),
    Error, // already logged
}

#[derive(Debug)]
pub struct OpenSuccess {
    pub lines: Vec<String>,
    pub file_name: PathBuf,
}

/// Read `path` into a list of lines.
pub fn open_file(path: &Path) -> OpenFileResult {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let lines: Vec<String> = content.lines().map(str::to_string).collect();
            tracing::debug!(
                target: "io",
                file = %path.display(),
                size_bytes = content.len(),
                line_count = lines.len(),
                "file_read_ok"
            );
            OpenFileResult::Success(OpenSuccess {
                lines,
                file_name: path.to_path_buf(),
            })
        }
        Err(e) => {
            tracing::error!(target: "io", file = %path.display(), ?e, "file_open_error");
            OpenFileResult::Error
        }
    }
}

/// Result of a write attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum WriteFileResult {
    Success,
    Error,
}

/// Serialize `lines` to `path`, each followed by a newline.
pub fn write_file(lines: &[String], path: &Path) -> WriteFileResult {
    let capacity = lines.iter().map(|l| l.len() + 1).sum();
    let mut content = String::with_capacity(capacity);
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    match std::fs::write(path, content.as_bytes()) {
        Ok(_) => {
            tracing::debug!(
                target: "io",
                file = %path.display(),
                size_bytes = content.len(),
                line_count = lines.len(),
                "file_write_ok"
            );
            WriteFileResult::Success
        }
        Err(e) => {
            tracing::error!(target: "io", file = %path.display(), ?e, "file_write_error");
            WriteFileResult::Error
        }
    }
}
