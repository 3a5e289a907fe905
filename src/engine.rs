// Chunk: docs/chunks/edit_engine - Keystroke-to-edit engine facade
//!
//! The engine turns one edit command plus the current buffer, selection and
//! language hint into a replacement buffer and selection. It holds only
//! immutable settings, so the same engine can serve any number of sessions.

use edit_engine_buffer::{
    indent_lines, newline_indent, tab_indent, toggle_comment, EditResult, IndentDirection,
    IndentUnit, Selection,
};
use edit_engine_input::KeyEvent;
use edit_engine_language::{LanguageConfig, LanguageRegistry};

use crate::command::EditCommand;
use crate::config::{EngineConfig, TabSelectionMode};

/// Dispatches edit commands to the buffer operations.
#[derive(Debug, Clone)]
pub struct EditorEngine {
    config: EngineConfig,
    indent_unit: IndentUnit,
    registry: LanguageRegistry,
}

impl EditorEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            indent_unit: config.indent_unit(),
            config,
            registry: LanguageRegistry::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Resolves a file extension; unknown extensions are plain text.
    pub fn language(&self, ext: &str) -> &LanguageConfig {
        self.registry.resolve(ext)
    }

    /// Applies `command` to `buffer`, resolving `language_hint` as a file
    /// extension.
    ///
    /// Never fails: offsets are clamped, reversed selections are swapped and
    /// unknown languages use the default comment marker.
    pub fn apply(
        &self,
        command: EditCommand,
        buffer: &str,
        selection: Selection,
        language_hint: &str,
    ) -> EditResult {
        let language = self.registry.resolve(language_hint);
        self.apply_with_language(command, buffer, selection, language)
    }

    /// Applies `command` with an already resolved language.
    pub fn apply_with_language(
        &self,
        command: EditCommand,
        buffer: &str,
        selection: Selection,
        language: &LanguageConfig,
    ) -> EditResult {
        let unit = &self.indent_unit;
        // Mode choice must see the same selection the operations will.
        let selection = selection.clamped(buffer.chars().count());
        let lines_mode = self.config.tab_selection == TabSelectionMode::IndentLines
            && !selection.is_caret();

        let result = match command {
            EditCommand::Enter => newline_indent(buffer, selection, unit),
            EditCommand::Tab if lines_mode => {
                indent_lines(buffer, selection, IndentDirection::In, unit)
            }
            EditCommand::Tab => tab_indent(buffer, selection, IndentDirection::In, unit),
            EditCommand::ShiftTab if lines_mode => {
                indent_lines(buffer, selection, IndentDirection::Out, unit)
            }
            EditCommand::ShiftTab => tab_indent(buffer, selection, IndentDirection::Out, unit),
            EditCommand::ToggleComment => toggle_comment(buffer, selection, language.line_comment),
        };

        tracing::debug!(
            %command,
            language = language.name,
            start = selection.start,
            end = selection.end,
            new_start = result.selection.start,
            new_end = result.selection.end,
            dirty = ?result.dirty,
            "applied edit command"
        );
        result
    }

    /// Maps a key event to a command and applies it.
    ///
    /// Returns `None` for keys the engine does not handle; the caller should
    /// let its text surface process those natively.
    pub fn handle_key(
        &self,
        event: &KeyEvent,
        buffer: &str,
        selection: Selection,
        language_hint: &str,
    ) -> Option<EditResult> {
        let command = EditCommand::from_key_event(event)?;
        Some(self.apply(command, buffer, selection, language_hint))
    }
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
