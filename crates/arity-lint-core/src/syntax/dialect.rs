//! Source dialects and their Tree-sitter grammars.

use std::path::Path;

use tree_sitter::Language;

use super::SyntaxError;

/// A JavaScript-family dialect, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `.js`, `.mjs`, `.cjs`
    JavaScript,
    /// `.jsx`
    Jsx,
    /// `.ts`, `.mts`, `.cts`
    TypeScript,
    /// `.tsx`
    Tsx,
}

impl Dialect {
    /// All file extensions the linter understands, without the leading dot.
    pub const EXTENSIONS: &'static [&'static str] =
        &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

    /// Maps a file extension (without the dot) to a dialect.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    /// Maps a file path to a dialect.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnsupportedExtension`] for non-JavaScript files.
    pub fn from_path(path: &Path) -> Result<Self, SyntaxError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| SyntaxError::UnsupportedExtension(ext.to_string()))
    }

    /// Returns the Tree-sitter grammar for this dialect.
    ///
    /// The JavaScript grammar accepts JSX, so `.js` and `.jsx` share it.
    #[must_use]
    pub fn language(self) -> Language {
        match self {
            Self::JavaScript | Self::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}
