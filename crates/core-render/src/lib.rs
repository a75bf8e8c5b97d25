//! Rendering: viewport layout, title/feedback composition and frame emission.
//!
//! Every redraw is a full frame. State is small (a line list plus a scroll
//! offset) and redraws only happen after a command or a scroll key, so there is
//! no partial repaint path.
//!
//! Pipeline:
//! 1. `viewport::layout` places buffer lines from the scroll offset into the band,
//!    advancing by the rows each line occupies once the terminal wraps it.
//! 2. `status` composes the full-width title and feedback rows in display cells.
//! 3. `render_engine::build_frame` turns both into ordered `writer::Command`s.
//! 4. `writer::Writer::flush` queues the commands on stdout and flushes once.
//!
//! Invariants:
//! - Band rows are cleared before any line is drawn; stale text never survives.
//! - Drawing never reaches the feedback or command rows from inside the band.
//! - After a frame the cursor rests at column 0 of the command row.
//!
//! `build_frame` is pure so tests assert frame content without a terminal.

pub mod render_engine;
pub mod status;
pub mod viewport;
pub mod writer;

pub use render_engine::{FrameContext, RESERVED_ROWS, RenderEngine, build_frame, paint_feedback};
pub use writer::Writer;
