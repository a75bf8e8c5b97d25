//! Viewport windowing: which buffer lines land on which screen rows.
//!
//! Pure function of (buffer, scroll offset, band height, terminal width). The
//! band is the region between the title row and the feedback row.
//!
//! Guarantees:
//! * The first emitted row is buffer line `first_line + 1` at band row 0.
//! * Each emitted line starts below the previous one by the number of rows the
//!   previous line actually occupies once the terminal wraps it (at least one).
//! * Emission stops when the band is full or the buffer is exhausted.
//! * Gutter width is the digit count of the buffer length, recomputed per call.
//! * Row text has its tabs expanded from the column after the gutter, so the
//!   measured width is what the terminal will actually advance.

use core_text::{LineBuffer, display_rows, display_width, expand_tabs};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Zero-based index of the first buffer line shown (the scroll offset).
    pub first_line: usize,
    /// Screen rows available for buffer text.
    pub height: usize,
    /// Terminal width in columns (0 = unknown, no wrapping assumed).
    pub columns: usize,
}

impl Viewport {
    pub fn new(first_line: usize, height: usize, columns: usize) -> Self {
        Self {
            first_line,
            height,
            columns,
        }
    }
}

/// One buffer line placed in the band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportRow<'a> {
    /// Band-relative row where the line starts.
    pub screen_row: usize,
    /// 1-based line number shown in the gutter.
    pub line_number: usize,
    /// Line text ready to print (tabs expanded).
    pub text: Cow<'a, str>,
    /// Rows the drawn line occupies (gutter, separator and text, wrapped).
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportLayout<'a> {
    pub gutter_width: usize,
    pub rows: Vec<ViewportRow<'a>>,
}

impl ViewportLayout<'_> {
    /// Right-aligned line number padded to the gutter width.
    pub fn gutter_label(&self, row: &ViewportRow<'_>) -> String {
        format!("{:>width$}", row.line_number, width = self.gutter_width)
    }
}

pub fn layout(buffer: &LineBuffer, viewport: Viewport) -> ViewportLayout<'_> {
    let gutter_width = buffer.gutter_width();
    let mut rows = Vec::new();
    let mut row = 0usize;
    for (idx, text) in buffer.lines().iter().enumerate().skip(viewport.first_line) {
        if row >= viewport.height {
            break;
        }
        let prefix = gutter_width + 1;
        let text = expand_tabs(text, prefix);
        let used = display_rows(prefix + display_width(&text), viewport.columns);
        rows.push(ViewportRow {
            screen_row: row,
            line_number: idx + 1,
            text,
            rows: used,
        });
        row += used;
    }
    ViewportLayout { gutter_width, rows }
}
