// Chunk: docs/chunks/tab_indent - Tab / Shift+Tab indent and outdent
// Chunk: docs/chunks/comment_toggle - Line comment toggling across a selection

//! Property tests for the editing operations.

use edit_engine_buffer::{
    newline_indent, tab_indent, toggle_comment, IndentDirection, IndentUnit, LineIndex, Selection,
};
use proptest::prelude::*;

/// Buffers of plain lines that never start with `#` once trimmed.
fn uncommented_buffer() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z ]{0,8}", 1..6).prop_map(|lines| lines.join("\n"))
}

proptest! {
    /// Tab then Shift+Tab with the caret inside a space-only indent restores
    /// the buffer and the caret.
    #[test]
    fn indent_round_trip(
        indent in 0usize..6,
        body in "[a-z(){}]{0,10}",
        caret_col in 0usize..6,
        before in prop::collection::vec("[a-z ]{0,6}", 0..3),
    ) {
        let unit = IndentUnit::default();
        let caret_col = caret_col.min(indent);
        let mut lines = before.clone();
        lines.push(format!("{}{}", " ".repeat(indent), body));
        let text = lines.join("\n");

        let line = before.len();
        let index = LineIndex::from_text(&text);
        let caret = index.line_start(line).unwrap() + caret_col;

        let indented = tab_indent(&text, Selection::caret(caret), IndentDirection::In, &unit);
        let restored = tab_indent(&indented.buffer, indented.selection, IndentDirection::Out, &unit);
        prop_assert_eq!(restored.buffer, text);
        prop_assert_eq!(restored.selection, Selection::caret(caret));
    }

    /// Toggling twice with the returned selection is a no-op when the touched
    /// lines start out uncommented.
    #[test]
    fn double_comment_toggle_is_identity(
        text in uncommented_buffer(),
        a in 0usize..60,
        b in 0usize..60,
    ) {
        let once = toggle_comment(&text, Selection::new(a, b), "#");
        let twice = toggle_comment(&once.buffer, once.selection, "#");
        prop_assert_eq!(twice.buffer, text);
    }

    /// Toggling keeps the selection on the same lines.
    #[test]
    fn comment_toggle_preserves_touched_lines(
        text in uncommented_buffer(),
        a in 0usize..60,
        b in 0usize..60,
    ) {
        let selection = Selection::new(a, b);
        let before = LineIndex::from_text(&text).touched_lines(selection);
        let result = toggle_comment(&text, selection, "//");
        let after = LineIndex::from_text(&result.buffer).touched_lines(result.selection);
        prop_assert_eq!(before, after);
    }

    /// Operations accept any offsets and always return a selection inside
    /// the new buffer.
    #[test]
    fn operations_are_total(
        text in "[a-z {}\n]{0,40}",
        a in 0usize..100,
        b in 0usize..100,
    ) {
        let unit = IndentUnit::default();
        let selection = Selection { start: a, end: b };
        for result in [
            newline_indent(&text, selection, &unit),
            tab_indent(&text, selection, IndentDirection::In, &unit),
            tab_indent(&text, selection, IndentDirection::Out, &unit),
            toggle_comment(&text, selection, "//"),
        ] {
            let len = result.buffer.chars().count();
            prop_assert!(result.selection.start <= result.selection.end);
            prop_assert!(result.selection.end <= len);
        }
    }

    /// A caret touches exactly one line, and that line contains it.
    #[test]
    fn caret_touches_one_line(text in "[a-z\n]{0,30}", offset in 0usize..40) {
        let index = LineIndex::from_text(&text);
        let lines = index.touched_lines(Selection::caret(offset));
        prop_assert_eq!(lines.start(), lines.end());

        let line = *lines.start();
        let offset = index.clamp(offset);
        prop_assert!(index.line_start(line).unwrap() <= offset);
        prop_assert!(offset <= index.line_end(line).unwrap());
    }
}
