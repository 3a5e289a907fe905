// Chunk: docs/chunks/line_index - Offset to line/column conversion

//! Line index for locating line boundaries in a buffer.
//!
//! Buffers are immutable values that are replaced on every edit, so the index
//! is rebuilt from the current text for each operation and never cached
//! across edits. All offsets are character offsets, not byte offsets.

use std::ops::RangeInclusive;

use crate::types::{Position, Selection};

/// Tracks line boundaries in a buffer.
///
/// The line index keeps a list of character offsets where each line starts,
/// which gives O(1) line count and O(log n) lookup of the line containing a
/// given offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Character offsets where each line starts. line_starts[0] = 0 always.
    line_starts: Vec<usize>,
    /// Total number of characters in the indexed text.
    len: usize,
}

impl LineIndex {
    /// Builds the index for `text`.
    pub fn from_text(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for ch in text.chars() {
            len += 1;
            if ch == '\n' {
                line_starts.push(len);
            }
        }
        Self { line_starts, len }
    }

    /// Returns the number of lines in the buffer.
    ///
    /// A buffer always has at least one line (even if empty), and a trailing
    /// newline opens a final empty line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the total number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clamps an offset to `[0, len]`.
    pub fn clamp(&self, offset: usize) -> usize {
        offset.min(self.len)
    }

    /// Returns the character offset where the given line starts.
    ///
    /// Returns None if the line index is out of bounds.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the character offset of the end of the given line.
    ///
    /// For all lines except the last, this points to the newline character.
    /// For the last line, this equals the total buffer length.
    pub fn line_end(&self, line: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }

        if line + 1 < self.line_count() {
            Some(self.line_starts[line + 1] - 1)
        } else {
            Some(self.len)
        }
    }

    /// Returns the length of the given line (excluding the newline character).
    pub fn line_len(&self, line: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_end(line)?;
        Some(end - start)
    }

    /// Returns the line number containing the given character offset.
    ///
    /// The offset of a newline belongs to the line it terminates. Offsets past
    /// the end of the buffer are clamped first.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        let offset = self.clamp(offset);
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Converts a character offset to a (line, column) position.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = self.clamp(offset);
        let line = self.line_at_offset(offset);
        Position::new(line, offset - self.line_starts[line])
    }

    /// Converts a (line, column) position to a character offset.
    ///
    /// The line is clamped to the last line and the column to the line length.
    pub fn position_to_offset(&self, pos: Position) -> usize {
        let line = pos.line.min(self.line_count() - 1);
        let start = self.line_starts[line];
        let len = self.line_len(line).unwrap_or(0);
        start + pos.col.min(len)
    }

    /// Returns the inclusive range of lines a selection touches.
    ///
    /// A caret touches exactly the line it sits on. A non-empty selection
    /// whose end sits exactly at a line start still touches that line.
    pub fn touched_lines(&self, selection: Selection) -> RangeInclusive<usize> {
        let selection = selection.clamped(self.len);
        let first = self.line_at_offset(selection.start);
        if selection.is_caret() {
            return first..=first;
        }
        first..=self.line_at_offset(selection.end)
    }

    /// Returns the raw line_starts array (for debug validation).
    #[cfg(test)]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::from_text("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let index = LineIndex::from_text("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
        assert!(index.is_empty());
    }

    #[test]
    fn test_single_line() {
        let index = LineIndex::from_text("hello");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_multiple_lines() {
        let index = LineIndex::from_text("hello\nworld\n");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_starts(), &[0, 6, 12]);
    }

    #[test]
    fn test_line_end() {
        let index = LineIndex::from_text("hello\nworld");
        assert_eq!(index.line_end(0), Some(5)); // "hello" ends at 5 (before \n)
        assert_eq!(index.line_end(1), Some(11)); // "world" ends at 11
        assert_eq!(index.line_end(2), None);
    }

    #[test]
    fn test_line_len() {
        let index = LineIndex::from_text("hello\nhi\n");
        assert_eq!(index.line_len(0), Some(5));
        assert_eq!(index.line_len(1), Some(2));
        assert_eq!(index.line_len(2), Some(0));
    }

    #[test]
    fn test_line_at_offset() {
        let index = LineIndex::from_text("hello\nworld\nfoo");

        assert_eq!(index.line_at_offset(0), 0); // 'h'
        assert_eq!(index.line_at_offset(5), 0); // '\n'
        assert_eq!(index.line_at_offset(6), 1); // 'w'
        assert_eq!(index.line_at_offset(11), 1); // '\n'
        assert_eq!(index.line_at_offset(12), 2); // 'f'
        assert_eq!(index.line_at_offset(999), 2); // clamped
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let index = LineIndex::from_text("héllo\nwörld");
        assert_eq!(index.len(), 11);
        assert_eq!(index.line_start(1), Some(6));
    }

    #[test]
    fn test_offset_to_position() {
        let index = LineIndex::from_text("ab\ncde\n");
        assert_eq!(index.offset_to_position(0), Position::new(0, 0));
        assert_eq!(index.offset_to_position(2), Position::new(0, 2));
        assert_eq!(index.offset_to_position(4), Position::new(1, 1));
        assert_eq!(index.offset_to_position(7), Position::new(2, 0));
        assert_eq!(index.offset_to_position(100), Position::new(2, 0));
    }

    #[test]
    fn test_position_to_offset_clamps() {
        let index = LineIndex::from_text("ab\ncde");
        assert_eq!(index.position_to_offset(Position::new(1, 2)), 5);
        assert_eq!(index.position_to_offset(Position::new(0, 40)), 2);
        assert_eq!(index.position_to_offset(Position::new(9, 1)), 4);
    }

    #[test]
    fn test_touched_lines_caret() {
        let index = LineIndex::from_text("a\nb\nc");
        assert_eq!(index.touched_lines(Selection::caret(2)), 1..=1);
        // Caret on the newline belongs to the line it ends
        assert_eq!(index.touched_lines(Selection::caret(1)), 0..=0);
    }

    #[test]
    fn test_touched_lines_end_at_line_start() {
        let index = LineIndex::from_text("a\nb\nc");
        // [0, 2) ends exactly where line 1 begins; line 1 is still touched
        assert_eq!(index.touched_lines(Selection::new(0, 2)), 0..=1);
    }

    #[test]
    fn test_touched_lines_whole_buffer() {
        let index = LineIndex::from_text("a\nb\nc");
        assert_eq!(index.touched_lines(Selection::new(0, 5)), 0..=2);
    }

    #[test]
    fn test_touched_lines_clamps_out_of_range() {
        let index = LineIndex::from_text("a\nb");
        assert_eq!(index.touched_lines(Selection::new(50, 70)), 1..=1);
    }
}
