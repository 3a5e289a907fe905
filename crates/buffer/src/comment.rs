// Chunk: docs/chunks/comment_toggle - Line comment toggling across a selection

//! Line-comment toggling.
//!
//! The first touched line decides the direction for the whole selection. A
//! mixed selection whose first line is uncommented therefore gains a second
//! marker on lines that were already commented; callers that want per-line
//! resolution must split the selection themselves.

use crate::line_index::LineIndex;
use crate::splice::{apply_line_edits, byte_offset, leading_whitespace, LineEdit};
use crate::types::{DirtyLines, EditResult, Selection};

/// What a toggle did to the touched lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAction {
    Comment,
    Uncomment,
}

/// Decides whether toggling `selection` would comment or uncomment.
pub fn comment_action(text: &str, selection: Selection, marker: &str) -> CommentAction {
    let index = LineIndex::from_text(text);
    let first = *index.touched_lines(selection).start();
    if is_commented(line_text(text, &index, first), marker) {
        CommentAction::Uncomment
    } else {
        CommentAction::Comment
    }
}

/// Toggles the line-comment `marker` on every line the selection touches.
///
/// Commenting inserts `marker` and one space right after each line's leading
/// whitespace, blank lines included. Uncommenting removes the marker and at
/// most one following space from lines that carry it and skips the rest.
/// The returned selection covers the same lines as the input.
pub fn toggle_comment(text: &str, selection: Selection, marker: &str) -> EditResult {
    let index = LineIndex::from_text(text);
    let selection = selection.clamped(index.len());
    if marker.is_empty() {
        return EditResult::unchanged(text, selection);
    }

    let lines = index.touched_lines(selection);
    let (first, last) = (*lines.start(), *lines.end());
    let action = comment_action(text, selection, marker);

    let edits: Vec<LineEdit> = lines
        .filter_map(|line| {
            let content = line_text(text, &index, line);
            let indent = leading_whitespace(content).chars().count();
            match action {
                CommentAction::Comment => {
                    Some(LineEdit::insert(line, indent, format!("{marker} ")))
                }
                CommentAction::Uncomment => {
                    if !is_commented(content, marker) {
                        tracing::trace!(line, "uncomment skipped: line has no marker");
                        return None;
                    }
                    let body = content.trim_start();
                    let after = &body[marker.len()..];
                    let space = usize::from(after.starts_with(' '));
                    Some(LineEdit::remove(
                        line,
                        indent,
                        marker.chars().count() + space,
                    ))
                }
            }
        })
        .collect();

    let (buffer, selection) = apply_line_edits(text, &index, &edits, selection);
    EditResult {
        buffer,
        selection,
        dirty: DirtyLines::lines(first, last),
    }
}

fn is_commented(line: &str, marker: &str) -> bool {
    line.trim_start().starts_with(marker)
}

/// Text of one line without its newline.
fn line_text<'a>(text: &'a str, index: &LineIndex, line: usize) -> &'a str {
    let start = index.line_start(line).unwrap_or(0);
    let end = index.line_end(line).unwrap_or(start);
    &text[byte_offset(text, start)..byte_offset(text, end)]
}
