//! Title bar and feedback line composition.
//!
//! Both rows are painted full width so their reverse-video background spans the
//! terminal. Composition works in display cells, not bytes.
//!
//! Feedback line format: `<message><padding><file label>` where the label is
//! right-aligned. When the two collide the message is clipped first; a label
//! wider than the terminal is clipped from the left edge onward.

use core_text::{display_width, truncate_to_width};

/// Center `title` in a row `columns` wide, padding both sides with spaces.
pub fn compose_title(title: &str, columns: usize) -> String {
    let title = truncate_to_width(title, columns);
    let used = display_width(title);
    let left = (columns - used) / 2;
    let right = columns - used - left;
    let mut out = String::with_capacity(columns);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(title);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

/// Feedback message left-aligned and file label right-aligned in `columns` cells.
pub fn compose_feedback(message: &str, file_label: &str, columns: usize) -> String {
    let label = truncate_to_width(file_label, columns);
    let label_w = display_width(label);
    // Keep one blank cell between message and label when both are present.
    let room = columns.saturating_sub(label_w).saturating_sub(1);
    let message = truncate_to_width(message, room);
    let pad = columns - label_w - display_width(message);
    let mut out = String::with_capacity(columns);
    out.push_str(message);
    out.extend(std::iter::repeat_n(' ', pad));
    out.push_str(label);
    out
}
