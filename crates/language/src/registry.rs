// Chunk: docs/chunks/language_registry - Extension to comment marker registry

//! Language registry mapping file extensions to comment markers and display
//! names.
//!
//! Lookups never fail from the caller's point of view: [`LanguageRegistry::resolve`]
//! falls back to plain text, which uses the `//` marker.

use std::collections::HashMap;
use std::path::Path;

/// Line-comment marker used when a language is unknown.
pub const DEFAULT_LINE_COMMENT: &str = "//";

/// What the editing engine needs to know about a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Display name shown in the status bar (e.g. "typescript")
    pub name: &'static str,
    /// Token that starts a line comment
    pub line_comment: &'static str,
}

impl LanguageConfig {
    /// Creates a new language configuration.
    pub const fn new(name: &'static str, line_comment: &'static str) -> Self {
        Self { name, line_comment }
    }
}

const JAVASCRIPT: LanguageConfig = LanguageConfig::new("javascript", "//");
const TYPESCRIPT: LanguageConfig = LanguageConfig::new("typescript", "//");
const PYTHON: LanguageConfig = LanguageConfig::new("python", "#");
const HTML: LanguageConfig = LanguageConfig::new("html", "<!--");
const CSS: LanguageConfig = LanguageConfig::new("css", "/*");
const JSON: LanguageConfig = LanguageConfig::new("json", DEFAULT_LINE_COMMENT);
const MARKDOWN: LanguageConfig = LanguageConfig::new("markdown", DEFAULT_LINE_COMMENT);

/// Fallback for unknown or missing extensions.
pub const PLAIN_TEXT: LanguageConfig = LanguageConfig::new("text", DEFAULT_LINE_COMMENT);

/// Registry mapping file extensions to language configurations.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    /// Map from lowercase extension (without leading dot) to language config
    configs: HashMap<&'static str, LanguageConfig>,
}

impl LanguageRegistry {
    /// Creates a new language registry with all supported languages.
    pub fn new() -> Self {
        let mut configs = HashMap::new();

        configs.insert("js", JAVASCRIPT);
        configs.insert("jsx", JAVASCRIPT);
        configs.insert("ts", TYPESCRIPT);
        configs.insert("tsx", TYPESCRIPT);
        configs.insert("py", PYTHON);
        configs.insert("html", HTML);
        configs.insert("css", CSS);
        configs.insert("json", JSON);
        configs.insert("md", MARKDOWN);

        Self { configs }
    }

    /// Returns the language configuration for a file extension.
    ///
    /// The extension can be with or without a leading dot (e.g., ".py" or "py")
    /// and is matched case-insensitively.
    pub fn config_for_extension(&self, ext: &str) -> Option<&LanguageConfig> {
        let ext = ext.trim();
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_lowercase();
        self.configs.get(ext.as_str())
    }

    /// Returns an iterator over all supported extensions.
    pub fn supported_extensions(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().copied()
    }

    /// Returns the language configuration for a language name.
    ///
    /// # Supported mappings
    ///
    /// - "javascript", "js" → "js"
    /// - "typescript", "ts" → "ts"
    /// - "python", "py" → "py"
    /// - "markdown", "md" → "md"
    /// - "html", "css", "json" pass through
    pub fn config_for_language_name(&self, name: &str) -> Option<&LanguageConfig> {
        // Normalize: lowercase and trim
        let name = name.to_lowercase();
        let name = name.trim();

        let ext = match name {
            "javascript" => "js",
            "typescript" => "ts",
            "python" => "py",
            "markdown" => "md",
            other => other,
        };

        self.config_for_extension(ext)
    }

    /// Resolves a file extension to a configuration, falling back to
    /// [`PLAIN_TEXT`] for anything outside the table.
    ///
    /// Language names are not accepted here; a file named `notes.python` is
    /// plain text. Use [`LanguageRegistry::config_for_language_name`] for
    /// name lookups.
    pub fn resolve(&self, ext: &str) -> &LanguageConfig {
        self.config_for_extension(ext).unwrap_or(&PLAIN_TEXT)
    }

    /// Resolves the language of a file by its name or path.
    pub fn resolve_file(&self, file_name: &str) -> &LanguageConfig {
        extension_of(file_name)
            .and_then(|ext| self.config_for_extension(ext))
            .unwrap_or(&PLAIN_TEXT)
    }

    /// Comment marker for a file extension.
    pub fn line_comment(&self, ext: &str) -> &'static str {
        self.resolve(ext).line_comment
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the extension from a file name or path, without the dot.
///
/// Returns `None` for names without an extension, including dotfiles such
/// as `.gitignore`.
pub fn extension_of(file_name: &str) -> Option<&str> {
    Path::new(file_name).extension().and_then(|ext| ext.to_str())
}
