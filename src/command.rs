// Chunk: docs/chunks/key_commands - Keystroke to edit command mapping

use std::fmt;

use edit_engine_input::{Key, KeyEvent};

/// The keystrokes the engine rewrites the buffer for.
///
/// Every other key (plain typing, arrows, Backspace, ...) is left to the
/// embedding text surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditCommand {
    /// Line break with auto-indent
    Enter,
    /// Indent
    Tab,
    /// Outdent
    ShiftTab,
    /// Line comment toggle (Ctrl+/ or Cmd+/)
    ToggleComment,
}

impl EditCommand {
    /// Maps a key event to an edit command, if the engine handles it.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        let mods = event.modifiers;
        match event.key {
            Key::Return if !mods.has_shortcut() => Some(EditCommand::Enter),
            Key::Tab if mods.is_empty() => Some(EditCommand::Tab),
            Key::Tab if mods.is_shift_only() => Some(EditCommand::ShiftTab),
            Key::Char('/') if mods.has_shortcut() => Some(EditCommand::ToggleComment),
            _ => None,
        }
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditCommand::Enter => "enter",
            EditCommand::Tab => "tab",
            EditCommand::ShiftTab => "shift_tab",
            EditCommand::ToggleComment => "toggle_comment",
        };
        f.write_str(name)
    }
}
