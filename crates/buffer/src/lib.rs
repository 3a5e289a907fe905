// Chunk: docs/chunks/line_index - Offset to line/column conversion

//! edit-engine-buffer: pure editing operations over an immutable text buffer.
//!
//! A buffer is a `&str` with `\n` line separators and a selection is a pair
//! of character offsets. Every operation is a function
//! `(buffer, selection, ...) -> EditResult` that builds a replacement buffer
//! and a new selection; nothing is mutated in place and no line index is
//! cached between edits.
//!
//! # Overview
//!
//! - [`LineIndex`] converts between flat offsets and (line, column) positions
//!   and finds the lines a selection touches
//! - [`newline_indent`] inserts a line break that inherits indentation
//! - [`tab_indent`] and [`indent_lines`] handle Tab / Shift+Tab
//! - [`toggle_comment`] toggles a line-comment marker across a selection
//!
//! # Example
//!
//! ```
//! use edit_engine_buffer::{newline_indent, toggle_comment, IndentUnit, Selection};
//!
//! let result = newline_indent("  if (x) {", Selection::caret(10), &IndentUnit::default());
//! assert_eq!(result.buffer, "  if (x) {\n    ");
//! assert_eq!(result.selection, Selection::caret(15));
//!
//! let result = toggle_comment("a\nb\nc", Selection::new(0, 5), "#");
//! assert_eq!(result.buffer, "# a\n# b\n# c");
//! ```
//!
//! # Dirty Line Tracking
//!
//! Each [`EditResult`] carries a [`DirtyLines`] value naming the lines that
//! changed, so an embedding UI can limit what it redraws:
//!
//! - `DirtyLines::None` - the edit was a no-op
//! - `DirtyLines::Single(line)` - only one line changed
//! - `DirtyLines::Range { from, to }` - lines `[from, to)` changed in place
//! - `DirtyLines::FromLineToEnd(line)` - lines were split or joined

mod comment;
mod indent;
mod line_index;
mod splice;
mod types;

pub use comment::{comment_action, toggle_comment, CommentAction};
pub use indent::{indent_lines, newline_indent, tab_indent, IndentDirection, IndentUnit};
pub use line_index::LineIndex;
pub use types::{DirtyLines, EditResult, Position, Selection};
