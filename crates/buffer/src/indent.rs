// Chunk: docs/chunks/newline_indent - Auto-indent on line break
// Chunk: docs/chunks/tab_indent - Tab / Shift+Tab indent and outdent

//! Indentation edits: auto-indent on Enter and Tab / Shift+Tab handling.
//!
//! Every function takes the current buffer and selection and returns an
//! [`EditResult`] with the replacement buffer. Offsets outside the buffer are
//! clamped; none of these operations can fail.

use crate::line_index::LineIndex;
use crate::splice::{apply_line_edits, byte_offset, leading_whitespace, splice, LineEdit};
use crate::types::{DirtyLines, EditResult, Selection};

/// Characters that open a block and deepen the next line's indentation.
const OPENING_BRACKETS: [char; 3] = ['{', '[', '('];

/// The whitespace token inserted by Tab and by block-opening auto-indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentUnit {
    text: String,
}

impl IndentUnit {
    /// Width of the default unit.
    pub const DEFAULT_WIDTH: usize = 2;

    /// An indent unit of `width` spaces. A zero width is raised to one space.
    pub fn spaces(width: usize) -> Self {
        Self {
            text: " ".repeat(width.max(1)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Width in characters.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::spaces(Self::DEFAULT_WIDTH)
    }
}

/// Direction of a Tab keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    /// Tab
    In,
    /// Shift+Tab
    Out,
}

/// Inserts a line break at the caret, carrying the current line's
/// indentation onto the new line.
///
/// A non-empty selection is deleted first and the caret placed at its start.
/// The new line copies the leading whitespace of the text before the caret;
/// when that text ends with an opening bracket one more `unit` is added. The
/// caret lands right after the inserted indentation.
pub fn newline_indent(text: &str, selection: Selection, unit: &IndentUnit) -> EditResult {
    let index = LineIndex::from_text(text);
    let selection = selection.clamped(index.len());
    let caret = selection.start;

    // Deleting the selection only touches text after `caret`, so the caret's
    // line and everything before it read the same in the original buffer.
    let line = index.line_at_offset(caret);
    let line_start = index.line_start(line).unwrap_or(0);
    let before = &text[byte_offset(text, line_start)..byte_offset(text, caret)];

    let mut indent = leading_whitespace(before).to_string();
    if before.trim_end().ends_with(OPENING_BRACKETS) {
        indent.push_str(unit.as_str());
    }

    let mut insert = String::with_capacity(indent.len() + 1);
    insert.push('\n');
    insert.push_str(&indent);

    let buffer = splice(text, caret, selection.end, &insert);
    EditResult {
        buffer,
        selection: Selection::caret(caret + 1 + indent.chars().count()),
        dirty: DirtyLines::FromLineToEnd(line),
    }
}

/// Handles Tab and Shift+Tab at a single insertion point.
///
/// `In` replaces the selection (or inserts at the caret) with one `unit` and
/// leaves the caret after it. `Out` removes one `unit` from the start of the
/// line holding the selection start, only when the line begins with exactly
/// that unit; otherwise the buffer is returned unchanged. The selection moves
/// back by the removed width but never before the line start.
pub fn tab_indent(
    text: &str,
    selection: Selection,
    direction: IndentDirection,
    unit: &IndentUnit,
) -> EditResult {
    let index = LineIndex::from_text(text);
    let selection = selection.clamped(index.len());

    match direction {
        IndentDirection::In => {
            let lines = index.touched_lines(selection);
            let (first, last) = (*lines.start(), *lines.end());
            let buffer = splice(text, selection.start, selection.end, unit.as_str());
            EditResult {
                buffer,
                selection: Selection::caret(selection.start + unit.width()),
                dirty: if first == last {
                    DirtyLines::Single(first)
                } else {
                    DirtyLines::FromLineToEnd(first)
                },
            }
        }
        IndentDirection::Out => {
            let line = index.line_at_offset(selection.start);
            let line_start = index.line_start(line).unwrap_or(0);
            if !line_has_unit(text, &index, line, unit) {
                tracing::trace!(line, "outdent skipped: line lacks a full indent unit");
                return EditResult::unchanged(text, selection);
            }

            let width = unit.width();
            let buffer = splice(text, line_start, line_start + width, "");
            let back = |offset: usize| offset.saturating_sub(width).max(line_start);
            EditResult {
                buffer,
                selection: Selection::new(back(selection.start), back(selection.end)),
                dirty: DirtyLines::Single(line),
            }
        }
    }
}

/// Indents or outdents every line the selection touches.
///
/// `In` prefixes each touched line with `unit`. `Out` strips one `unit` from
/// each touched line that starts with it and leaves the others alone. The
/// selection is carried across the edits so it still covers the same lines.
pub fn indent_lines(
    text: &str,
    selection: Selection,
    direction: IndentDirection,
    unit: &IndentUnit,
) -> EditResult {
    let index = LineIndex::from_text(text);
    let selection = selection.clamped(index.len());
    let lines = index.touched_lines(selection);
    let (first, last) = (*lines.start(), *lines.end());

    let edits: Vec<LineEdit> = match direction {
        IndentDirection::In => lines
            .map(|line| LineEdit::insert(line, 0, unit.as_str()))
            .collect(),
        IndentDirection::Out => lines
            .filter(|&line| line_has_unit(text, &index, line, unit))
            .map(|line| LineEdit::remove(line, 0, unit.width()))
            .collect(),
    };

    if edits.is_empty() {
        tracing::trace!(first, last, "outdent skipped: no touched line is indented");
        return EditResult::unchanged(text, selection);
    }

    let (buffer, selection) = apply_line_edits(text, &index, &edits, selection);
    EditResult {
        buffer,
        selection,
        dirty: DirtyLines::lines(first, last),
    }
}

fn line_has_unit(text: &str, index: &LineIndex, line: usize, unit: &IndentUnit) -> bool {
    let start = index.line_start(line).unwrap_or(0);
    text[byte_offset(text, start)..].starts_with(unit.as_str())
}
