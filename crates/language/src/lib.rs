// Chunk: docs/chunks/language_registry - Extension to comment marker registry

//! edit-engine-language: language resolution for edit-engine.
//!
//! The editing engine only needs two facts about a language: the token that
//! starts a line comment and a display name for the status bar. Both come
//! from a static table keyed by file extension.
//!
//! # Example
//!
//! ```
//! use edit_engine_language::LanguageRegistry;
//!
//! let registry = LanguageRegistry::new();
//! assert_eq!(registry.line_comment("py"), "#");
//! assert_eq!(registry.resolve_file("src/App.tsx").name, "typescript");
//! assert_eq!(registry.line_comment("unknown"), "//");
//! ```

mod registry;

pub use registry::{
    extension_of, LanguageConfig, LanguageRegistry, DEFAULT_LINE_COMMENT, PLAIN_TEXT,
};
