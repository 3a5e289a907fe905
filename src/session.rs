// Chunk: docs/chunks/edit_session - Per-file editing session
//!
//! An editing session owns the buffer and selection of one open file.
//!
//! Each keystroke replaces the pair wholesale with the engine's result, so
//! edit N always starts from the buffer edit N-1 produced. Sessions are never
//! shared: two open files get two sessions.

use edit_engine_buffer::{DirtyLines, LineIndex, Position, Selection};
use edit_engine_input::KeyEvent;
use edit_engine_language::{extension_of, LanguageConfig};

use crate::command::EditCommand;
use crate::engine::EditorEngine;

/// Line and character counts for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    /// Number of `\n`-separated lines (an empty buffer has one)
    pub lines: usize,
    /// Number of characters
    pub chars: usize,
}

/// Buffer and selection for a single open file.
#[derive(Debug, Clone)]
pub struct EditSession {
    file_name: String,
    /// Resolved once at open; every command uses it.
    language: LanguageConfig,
    text: String,
    selection: Selection,
    /// Lines changed since the UI last collected them.
    pending_dirty: DirtyLines,
}

impl EditSession {
    /// Opens a session for `file_name` with the caret at the start. The
    /// file's language comes from its extension, through `engine`'s registry.
    pub fn open(
        engine: &EditorEngine,
        file_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let file_name = file_name.into();
        let language = *engine.language(extension_of(&file_name).unwrap_or_default());
        Self {
            file_name,
            language,
            text: text.into(),
            selection: Selection::caret(0),
            pending_dirty: DirtyLines::None,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Display name of the file's language (e.g. "python", "text").
    pub fn language_name(&self) -> &'static str {
        self.language.name
    }

    /// Moves the caret or selection; offsets are clamped to the buffer.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.char_len());
    }

    /// Replaces the buffer after a change the engine did not make (plain
    /// typing, paste). The selection is clamped to the new text.
    pub fn replace_text(&mut self, text: impl Into<String>, selection: Selection) {
        self.text = text.into();
        self.selection = selection.clamped(self.char_len());
        self.pending_dirty.merge(DirtyLines::FromLineToEnd(0));
    }

    /// Applies one edit command to this session's buffer.
    pub fn apply(&mut self, engine: &EditorEngine, command: EditCommand) {
        let result =
            engine.apply_with_language(command, &self.text, self.selection, &self.language);
        self.text = result.buffer;
        self.selection = result.selection;
        self.pending_dirty.merge(result.dirty);
    }

    /// Handles a key event. Returns `false` when the engine does not handle
    /// the key and the UI should process it natively.
    pub fn handle_key(&mut self, engine: &EditorEngine, event: &KeyEvent) -> bool {
        match EditCommand::from_key_event(event) {
            Some(command) => {
                self.apply(engine, command);
                true
            }
            None => false,
        }
    }

    /// Returns the lines changed since the previous call and resets them.
    pub fn take_dirty(&mut self) -> DirtyLines {
        std::mem::replace(&mut self.pending_dirty, DirtyLines::None)
    }

    /// (line, column) of the selection end, where the caret sits.
    pub fn cursor_position(&self) -> Position {
        LineIndex::from_text(&self.text).offset_to_position(self.selection.end)
    }

    pub fn stats(&self) -> BufferStats {
        BufferStats {
            lines: self.text.split('\n').count(),
            chars: self.char_len(),
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
