// Chunk: docs/chunks/edit_engine - Keystroke-to-edit engine facade

//! edit-engine: the text editing engine behind an embedded source editor.
//!
//! The engine turns Enter, Tab, Shift+Tab and the comment shortcut into
//! multi-line buffer rewrites while keeping the caret coherent with the new
//! text. It is a synchronous, I/O-free library: the embedding UI passes the
//! current buffer, selection and a language hint, and writes back the
//! returned buffer and selection.
//!
//! # Overview
//!
//! - [`EditorEngine`] dispatches an [`EditCommand`] to the buffer operations
//! - [`EditSession`] owns the buffer/selection pair of one open file
//! - [`EngineConfig`] carries the indent width and Tab-with-selection mode
//!
//! # Example
//!
//! ```
//! use edit_engine::{EditCommand, EditorEngine, Selection};
//!
//! let engine = EditorEngine::default();
//! let result = engine.apply(EditCommand::Enter, "  if (x) {", Selection::caret(10), "js");
//! assert_eq!(result.buffer, "  if (x) {\n    ");
//! assert_eq!(result.selection, Selection::caret(15));
//!
//! let result = engine.apply(EditCommand::ToggleComment, "a\nb", Selection::new(0, 3), "py");
//! assert_eq!(result.buffer, "# a\n# b");
//! ```

mod command;
mod config;
mod engine;
mod session;

pub use command::EditCommand;
pub use config::{ConfigError, EngineConfig, TabSelectionMode};
pub use engine::EditorEngine;
pub use session::{BufferStats, EditSession};

pub use edit_engine_buffer::{DirtyLines, EditResult, IndentDirection, IndentUnit, Position, Selection};
pub use edit_engine_input::{Key, KeyEvent, Modifiers};
pub use edit_engine_language::{LanguageConfig, LanguageRegistry};
