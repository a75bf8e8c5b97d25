//! Terminal display width helpers.
//!
//! The viewport draws each line (tabs expanded) and lets the terminal wrap it. To keep the
//! following lines from being drawn over a wrapped one, the renderer needs the
//! number of screen rows a drawn line actually occupies. That displacement is
//! computed here from column widths instead of being read back from the
//! terminal cursor.

use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal tab stops are every eight columns.
pub const TAB_STOP: usize = 8;

/// Column width of `text` as the terminal will draw it.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Screen rows occupied by `cells` columns of output on a terminal `columns` wide.
///
/// Always at least one row; an empty line still consumes its row. A width of
/// zero columns (unknown terminal size) is treated as unbounded.
pub fn display_rows(cells: usize, columns: usize) -> usize {
    if columns == 0 || cells <= columns {
        return 1;
    }
    cells.div_ceil(columns)
}

/// Replace each tab with the spaces needed to reach the next tab stop, as if
/// `text` were printed starting at column `start_col`.
///
/// The renderer prints the expanded text, so `display_width` of the result is
/// exactly the number of cells the terminal advances. Text without tabs is
/// borrowed unchanged.
pub fn expand_tabs(text: &str, start_col: usize) -> Cow<'_, str> {
    if !text.contains('\t') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + TAB_STOP);
    let mut col = start_col;
    for ch in text.chars() {
        if ch == '\t' {
            let next = (col / TAB_STOP + 1) * TAB_STOP;
            out.extend(std::iter::repeat_n(' ', next - col));
            col = next;
        } else {
            out.push(ch);
            col += UnicodeWidthChar::width(ch).unwrap_or(0);
        }
    }
    Cow::Owned(out)
}

/// Longest prefix of `text` whose display width does not exceed `max_cells`.
pub fn truncate_to_width(text: &str, max_cells: usize) -> &str {
    let mut used = 0usize;
    for (idx, ch) in text.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_cells {
            return &text[..idx];
        }
        used += w;
    }
    text
}
