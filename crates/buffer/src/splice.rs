// Chunk: docs/chunks/line_index - Offset to line/column conversion

//! Character-offset splicing for immutable buffers.
//!
//! Every edit builds a fresh `String`; nothing here mutates the caller's text.

use crate::line_index::LineIndex;
use crate::types::Selection;

/// Converts a character offset within `text` to a byte offset.
///
/// Offsets past the end map to `text.len()`.
pub(crate) fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

/// Returns the leading whitespace of a single line.
pub(crate) fn leading_whitespace(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, ch)| !ch.is_whitespace())
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    &line[..end]
}

/// Replaces the characters in `[start, end)` with `insert`.
pub(crate) fn splice(text: &str, start: usize, end: usize, insert: &str) -> String {
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end);
    let mut out = String::with_capacity(text.len() - (end_byte - start_byte) + insert.len());
    out.push_str(&text[..start_byte]);
    out.push_str(insert);
    out.push_str(&text[end_byte..]);
    out
}

/// A change confined to one line: remove `remove` characters at `col`,
/// then insert `insert` there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineEdit {
    pub line: usize,
    pub col: usize,
    pub remove: usize,
    pub insert: String,
}

impl LineEdit {
    pub fn insert(line: usize, col: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            col,
            remove: 0,
            insert: text.into(),
        }
    }

    pub fn remove(line: usize, col: usize, count: usize) -> Self {
        Self {
            line,
            col,
            remove: count,
            insert: String::new(),
        }
    }
}

/// Applies per-line edits (at most one per line) and carries the selection
/// across them.
///
/// The buffer is split on `\n`, touched lines are rewritten and everything
/// is rejoined with `\n`, so untouched lines come through byte-for-byte.
pub(crate) fn apply_line_edits(
    text: &str,
    index: &LineIndex,
    edits: &[LineEdit],
    selection: Selection,
) -> (String, Selection) {
    let mut lines: Vec<String> = text.split('\n').map(String::from).collect();

    for edit in edits {
        let Some(line) = lines.get_mut(edit.line) else {
            continue;
        };
        let start = byte_offset(line, edit.col);
        let end = start + byte_offset(&line[start..], edit.remove);
        line.replace_range(start..end, &edit.insert);
    }

    let shift = |offset: usize| -> usize {
        let mut shifted = offset;
        for edit in edits {
            let at = index.line_start(edit.line).unwrap_or(0) + edit.col;
            if offset >= at {
                shifted += edit.insert.chars().count();
            }
            if offset > at {
                shifted -= (offset - at).min(edit.remove);
            }
        }
        shifted
    };

    let selection = Selection::new(shift(selection.start), shift(selection.end));
    (lines.join("\n"), selection)
}
