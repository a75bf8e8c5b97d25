//! RenderEngine: turns editor state into one batched terminal frame.
//!
//! Screen layout for a terminal `rows` tall:
//! * row 0: title bar, centered, bold reversed.
//! * rows 1..=rows-3: viewport band (line numbers dimmed).
//! * row rows-2: feedback line, reversed, file label right-aligned.
//! * row rows-1: command row, cleared, cursor parked at column 0.
//!
//! Every band row is cleared before lines are drawn. A wrapped line that would
//! run past the band is clipped so it never touches the feedback row. Rows that
//! do not exist on very small terminals are skipped.

use crate::status::{compose_feedback, compose_title};
use crate::viewport::{Viewport, layout};
use crate::writer::Writer;
use anyhow::Result;
use core_state::EditorState;
use core_text::truncate_to_width;
use crossterm::style::Attribute;
use tracing::trace;

/// Rows reserved outside the viewport band (title, feedback, command).
pub const RESERVED_ROWS: u16 = 3;

/// Terminal geometry and static decoration for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameContext<'a> {
    pub title: &'a str,
    pub columns: u16,
    pub rows: u16,
}

impl FrameContext<'_> {
    pub fn band_height(&self) -> usize {
        self.rows.saturating_sub(RESERVED_ROWS) as usize
    }
    pub fn feedback_row(&self) -> Option<u16> {
        self.rows.checked_sub(2)
    }
    pub fn command_row(&self) -> Option<u16> {
        self.rows.checked_sub(1)
    }
}

/// Public facade used by the binary to produce a frame from state and flush it to the terminal.
#[derive(Debug, Default)]
pub struct RenderEngine {
    frames: u64,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames flushed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn render(&mut self, state: &EditorState, ctx: FrameContext<'_>) -> Result<()> {
        let writer = build_frame(state, ctx);
        self.frames += 1;
        trace!(
            target: "render",
            frame = self.frames,
            commands = writer.commands().len(),
            offset = state.scroll_offset,
            "frame_flush"
        );
        writer.flush()
    }
}

/// Assemble every command for a full frame without touching the terminal.
pub fn build_frame(state: &EditorState, ctx: FrameContext<'_>) -> Writer {
    let mut w = Writer::new();
    let columns = ctx.columns as usize;

    if ctx.rows > 0 {
        w.clear_row(0);
        w.print_styled(
            &[Attribute::Bold, Attribute::Reverse],
            compose_title(ctx.title, columns),
        );
    }

    paint_band(&mut w, state, ctx);
    paint_feedback(&mut w, state.feedback(), &state.file_label(), ctx);
    w
}

fn paint_band(w: &mut Writer, state: &EditorState, ctx: FrameContext<'_>) {
    let height = ctx.band_height();
    if height == 0 {
        return;
    }
    for row in 0..height {
        w.clear_row(1 + row as u16);
    }

    let columns = ctx.columns as usize;
    let view = layout(
        &state.buffer,
        Viewport::new(state.scroll_offset, height, columns),
    );
    for row in &view.rows {
        w.move_to(0, 1 + row.screen_row as u16);
        w.print_styled(&[Attribute::Dim], view.gutter_label(row));
        let prefix = view.gutter_width + 1;
        let text = if row.screen_row + row.rows > height && columns > 0 {
            let budget = (height - row.screen_row) * columns;
            truncate_to_width(&row.text, budget.saturating_sub(prefix))
        } else {
            row.text.as_ref()
        };
        w.print(format!(" {text}"));
    }
}

/// Paint the feedback row and clear the command row, leaving the cursor at the
/// start of the command row. Also used while a prompt is active.
pub fn paint_feedback(w: &mut Writer, message: &str, file_label: &str, ctx: FrameContext<'_>) {
    if let Some(y) = ctx.feedback_row() {
        w.clear_row(y);
        w.print_styled(
            &[Attribute::Reverse],
            compose_feedback(message, file_label, ctx.columns as usize),
        );
    }
    if let Some(y) = ctx.command_row() {
        w.clear_row(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Command;
    use core_text::LineBuffer;
    use pretty_assertions::assert_eq;

    fn ctx(columns: u16, rows: u16) -> FrameContext<'static> {
        FrameContext {
            title: "TINR - TIN Reborn",
            columns,
            rows,
        }
    }

    fn state_with(lines: &[&str]) -> EditorState {
        let mut st = EditorState::new("tip");
        st.buffer = LineBuffer::from_lines(lines.iter().copied());
        st
    }

    /// Text printed after each MoveTo, keyed by row.
    fn rows_printed(w: &Writer) -> Vec<(u16, String)> {
        let mut out: Vec<(u16, String)> = Vec::new();
        for c in w.commands() {
            match c {
                Command::MoveTo(_, y) => out.push((*y, String::new())),
                Command::Print(s) => {
                    if let Some(last) = out.last_mut() {
                        last.1.push_str(s);
                    }
                }
                _ => {}
            }
        }
        out.retain(|(_, s)| !s.is_empty());
        out
    }

    #[test]
    fn full_frame_layout() {
        let mut st = state_with(&["alpha", "beta"]);
        st.begin_frame();
        let w = build_frame(&st, ctx(20, 8));
        let rows = rows_printed(&w);
        assert_eq!(
            rows,
            vec![
                (0, " TINR - TIN Reborn  ".to_string()),
                (1, "1 alpha".to_string()),
                (2, "2 beta".to_string()),
                (6, format!("tip{}None", " ".repeat(13))),
            ]
        );
        // Cursor ends on the cleared command row.
        assert_eq!(
            &w.commands()[w.commands().len() - 2..],
            [Command::MoveTo(0, 7), Command::ClearLine]
        );
    }

    #[test]
    fn band_rows_are_cleared() {
        let st = state_with(&["x"]);
        let w = build_frame(&st, ctx(10, 10));
        for y in 1..=7u16 {
            let pos = w
                .commands()
                .windows(2)
                .position(|p| p == [Command::MoveTo(0, y), Command::ClearLine]);
            assert!(pos.is_some(), "row {y} not cleared");
        }
    }

    #[test]
    fn scrolled_view_starts_at_offset() {
        let mut st = state_with(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        st.scroll_offset = 8;
        let w = build_frame(&st, ctx(20, 10));
        let rows = rows_printed(&w);
        assert_eq!(rows[1], (1, " 9 i".to_string()));
        assert_eq!(rows[2], (2, "10 j".to_string()));
    }

    #[test]
    fn wrapped_last_line_is_clipped_to_band() {
        // 4-row band, 10 columns. Line 1 uses 1 row, line 2 would need 5.
        let long = "z".repeat(45);
        let st = state_with(&["a", long.as_str()]);
        let w = build_frame(&st, ctx(10, 7));
        let rows = rows_printed(&w);
        let (y, text) = &rows[2];
        assert_eq!(*y, 2);
        // 3 remaining rows * 10 cells, minus "2 " prefix.
        assert_eq!(text.len(), 30);
    }

    #[test]
    fn tabbed_line_is_printed_expanded() {
        let st = state_with(&["a\tb", "next"]);
        let rows = rows_printed(&build_frame(&st, ctx(20, 8)));
        // "1 a" ends at column 3; the tab fills to column 8.
        assert_eq!(rows[1], (1, "1 a     b".to_string()));
        assert_eq!(rows[2], (2, "2 next".to_string()));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let st = state_with(&["a"]);
        for rows in 0..4 {
            let _ = build_frame(&st, ctx(5, rows));
        }
        let w = build_frame(&st, ctx(0, 0));
        assert!(w.commands().is_empty());
    }

    #[test]
    fn feedback_paint_only_touches_bottom_rows() {
        let mut w = Writer::new();
        paint_feedback(&mut w, "Enter line number:", "None", ctx(30, 10));
        let ys: Vec<u16> = w
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::MoveTo(_, y) => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(ys, vec![8, 9]);
        assert!(w.printed_text().starts_with("Enter line number:"));
    }

    #[test]
    fn engine_counts_frames() {
        let eng = RenderEngine::new();
        assert_eq!(eng.frames(), 0);
    }
}
