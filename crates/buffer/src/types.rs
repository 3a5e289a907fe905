// Chunk: docs/chunks/line_index - Offset to line/column conversion

use serde::{Deserialize, Serialize};

/// Position in the buffer as (line, column) where both are 0-indexed.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A half-open character range `[start, end)` within a buffer.
///
/// `start == end` is a caret with nothing selected. Offsets count characters
/// from the start of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Creates a selection, swapping the endpoints if they arrive reversed.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A collapsed selection at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Normalizes endpoint order and clamps both endpoints to `[0, len]`.
    ///
    /// Fields are public, so a caller may have built a reversed pair by hand;
    /// this is the single place every operation funnels its input through.
    pub fn clamped(&self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

/// Information about which lines were dirtied by an edit.
///
/// Line numbers refer to the buffer produced by the edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirtyLines {
    /// No lines changed (e.g., an outdent on a line without indentation).
    None,
    /// A single line changed (indent, outdent, single-line comment toggle).
    Single(usize),
    /// A range of lines changed [from, to). Used for multi-line comment toggles.
    Range { from: usize, to: usize },
    /// Everything from a line to the end of the buffer changed.
    /// Used when a line break pushes all subsequent lines down,
    /// or when deleting a selection pulls subsequent lines up.
    FromLineToEnd(usize),
}

impl DirtyLines {
    /// Returns true if no lines were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the starting line of the dirty region, if any.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(line) => Some(*line),
            DirtyLines::Range { from, .. } => Some(*from),
            DirtyLines::FromLineToEnd(line) => Some(*line),
        }
    }

    /// Dirty region for an inclusive span of lines.
    pub fn lines(first: usize, last: usize) -> Self {
        if first == last {
            DirtyLines::Single(first)
        } else {
            DirtyLines::Range {
                from: first.min(last),
                to: first.max(last) + 1,
            }
        }
    }

    /// Merges another dirty region into this one, producing the smallest
    /// region that covers both.
    ///
    /// An editing session merges the outcome of every keystroke until the
    /// embedding UI collects it, so one redraw covers everything that changed.
    pub fn merge(&mut self, other: DirtyLines) {
        *self = match (&*self, &other) {
            // None is the identity element
            (DirtyLines::None, _) => other,
            (_, DirtyLines::None) => return,

            (DirtyLines::FromLineToEnd(a), DirtyLines::FromLineToEnd(b)) => {
                DirtyLines::FromLineToEnd((*a).min(*b))
            }
            (DirtyLines::FromLineToEnd(a), other) | (other, DirtyLines::FromLineToEnd(a)) => {
                let b = other.start_line().unwrap_or(*a);
                DirtyLines::FromLineToEnd((*a).min(b))
            }

            (DirtyLines::Single(a), DirtyLines::Single(b)) => DirtyLines::lines(*a, *b),

            (DirtyLines::Single(a), DirtyLines::Range { from, to })
            | (DirtyLines::Range { from, to }, DirtyLines::Single(a)) => DirtyLines::Range {
                from: (*from).min(*a),
                to: (*to).max(*a + 1),
            },

            (DirtyLines::Range { from: a, to: b }, DirtyLines::Range { from: c, to: d }) => {
                DirtyLines::Range {
                    from: (*a).min(*c),
                    to: (*b).max(*d),
                }
            }
        };
    }
}

/// The outcome of one editing operation: the replacement buffer and where
/// the caret or selection lands in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResult {
    pub buffer: String,
    pub selection: Selection,
    pub dirty: DirtyLines,
}

impl EditResult {
    /// A result that leaves the buffer untouched.
    pub fn unchanged(buffer: &str, selection: Selection) -> Self {
        Self {
            buffer: buffer.to_string(),
            selection,
            dirty: DirtyLines::None,
        }
    }

    /// Returns true if the edit changed the buffer text.
    pub fn is_changed(&self) -> bool {
        !self.dirty.is_none()
    }
}
