// Chunk: docs/chunks/key_commands - Shared input types crate
//!
//! Keyboard event types for the editing engine.
//!
//! The embedding shell translates its native keyboard events (DOM
//! `KeyboardEvent`, terminal key codes, ...) into these types so the engine
//! never depends on a particular UI toolkit.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }

    /// Creates a KeyEvent for a key with shift held.
    pub fn shifted(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                shift: true,
                ..Default::default()
            },
        }
    }

    /// Creates a KeyEvent for a key with control held.
    pub fn control(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }

    /// Creates a KeyEvent for a key with command held.
    pub fn command(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                command: true,
                ..Default::default()
            },
        }
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Command / Meta key (Cmd/⌘, Windows key)
    pub command: bool,
    /// Option / Alt key
    pub option: bool,
    /// Control key (Ctrl/⌃)
    pub control: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.command && !self.option && !self.control
    }

    /// Returns true if only shift is held.
    pub fn is_shift_only(&self) -> bool {
        self.shift && !self.command && !self.option && !self.control
    }

    /// Returns true if the platform shortcut modifier (Control or Command)
    /// is held.
    pub fn has_shortcut(&self) -> bool {
        self.control || self.command
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Return / Enter
    Return,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Left arrow
    Left,
}
