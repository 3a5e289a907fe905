// Chunk: docs/chunks/newline_indent - Auto-indent on line break
// Chunk: docs/chunks/comment_toggle - Line comment toggling across a selection

//! Integration tests for realistic editing sequences.
//!
//! Each step feeds the previous step's buffer and selection into the next
//! operation, the way an embedding UI replays keystrokes.

use edit_engine_buffer::{
    newline_indent, tab_indent, toggle_comment, DirtyLines, IndentDirection, IndentUnit,
    LineIndex, Position, Selection,
};

fn type_text(buffer: &str, selection: Selection, text: &str) -> (String, Selection) {
    let start = buffer
        .char_indices()
        .nth(selection.start)
        .map(|(idx, _)| idx)
        .unwrap_or(buffer.len());
    let mut out = buffer.to_string();
    out.insert_str(start, text);
    (out, Selection::caret(selection.start + text.chars().count()))
}

#[test]
fn test_type_function_body_with_auto_indent() {
    let unit = IndentUnit::default();
    let (buf, sel) = type_text("", Selection::caret(0), "function f() {");

    let step = newline_indent(&buf, sel, &unit);
    assert_eq!(step.buffer, "function f() {\n  ");

    let (buf, sel) = type_text(&step.buffer, step.selection, "if (x) {");
    let step = newline_indent(&buf, sel, &unit);
    assert_eq!(step.buffer, "function f() {\n  if (x) {\n    ");

    let (buf, sel) = type_text(&step.buffer, step.selection, "go();");
    let step = newline_indent(&buf, sel, &unit);
    assert_eq!(step.buffer, "function f() {\n  if (x) {\n    go();\n    ");

    let index = LineIndex::from_text(&step.buffer);
    assert_eq!(
        index.offset_to_position(step.selection.start),
        Position::new(3, 4)
    );
}

#[test]
fn test_outdent_closing_line_after_auto_indent() {
    let unit = IndentUnit::default();
    let step = newline_indent("if (x) {", Selection::caret(8), &unit);
    let step = newline_indent(&step.buffer, step.selection, &unit);
    assert_eq!(step.buffer, "if (x) {\n  \n  ");

    let step = tab_indent(&step.buffer, step.selection, IndentDirection::Out, &unit);
    assert_eq!(step.buffer, "if (x) {\n  \n");
    let (buf, _) = type_text(&step.buffer, step.selection, "}");
    assert_eq!(buf, "if (x) {\n  \n}");
}

#[test]
fn test_indent_then_outdent_restores_line() {
    let unit = IndentUnit::default();
    let text = "a\n  b\nc";
    let caret = Selection::caret(2);

    let indented = tab_indent(text, caret, IndentDirection::In, &unit);
    assert_eq!(indented.buffer, "a\n    b\nc");
    assert_eq!(indented.selection, Selection::caret(4));

    let restored = tab_indent(
        &indented.buffer,
        indented.selection,
        IndentDirection::Out,
        &unit,
    );
    assert_eq!(restored.buffer, text);
    assert_eq!(restored.selection, caret);
}

#[test]
fn test_comment_block_then_uncomment_keeps_selection_lines() {
    let text = "def f():\n    x = 1\n\n    return x";
    let whole = Selection::new(0, text.chars().count());

    let commented = toggle_comment(text, whole, "#");
    assert_eq!(commented.buffer, "# def f():\n    # x = 1\n# \n    # return x");
    assert_eq!(commented.dirty, DirtyLines::Range { from: 0, to: 4 });

    let index = LineIndex::from_text(&commented.buffer);
    assert_eq!(index.touched_lines(commented.selection), 0..=3);

    let restored = toggle_comment(&commented.buffer, commented.selection, "#");
    assert_eq!(restored.buffer, text);
}

#[test]
fn test_reversed_selection_is_normalized() {
    let result = toggle_comment("a\nb", Selection { start: 3, end: 0 }, "//");
    assert_eq!(result.buffer, "// a\n// b");
}
