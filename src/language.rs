//! Language classification
//!
//! Maps file-name extensions onto a closed set of language tags and maps
//! each tag onto the presentation choices the tab strip, status bar and
//! highlighter need. A document without a tag is unclassified; the free
//! functions at module level accept `Option<LanguageTag>` and supply the
//! fallback presentation for `None`.

use crate::utils;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Languages the editor knows how to present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageTag {
    Java,
    JavaScript,
    TypeScript,
    Python,
    Kotlin,
    Html,
    Css,
    Markdown,
    Json,
    Xml,
    TypeScriptReact,
    JavaScriptReact,
    Cpp,
    C,
    Text,
}

/// Icon shown next to a tab or file tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageIcon {
    Java,
    JavaScript,
    TypeScript,
    Python,
    Kotlin,
    Html5,
    Css3,
    Markdown,
    Json,
    Xml,
    React,
    CPlusPlus,
    C,
    Text,
}

impl LanguageTag {
    /// Every tag, in menu order
    pub const ALL: [LanguageTag; 15] = [
        LanguageTag::Java,
        LanguageTag::JavaScript,
        LanguageTag::TypeScript,
        LanguageTag::Python,
        LanguageTag::Kotlin,
        LanguageTag::Html,
        LanguageTag::Css,
        LanguageTag::Markdown,
        LanguageTag::Json,
        LanguageTag::Xml,
        LanguageTag::TypeScriptReact,
        LanguageTag::JavaScriptReact,
        LanguageTag::Cpp,
        LanguageTag::C,
        LanguageTag::Text,
    ];

    /// Classify a bare extension (without the dot). Case-insensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let tag = match extension.to_ascii_lowercase().as_str() {
            "java" => LanguageTag::Java,
            "js" => LanguageTag::JavaScript,
            "ts" => LanguageTag::TypeScript,
            "py" => LanguageTag::Python,
            "kt" => LanguageTag::Kotlin,
            "html" => LanguageTag::Html,
            "css" | "scss" => LanguageTag::Css,
            "md" => LanguageTag::Markdown,
            "json" => LanguageTag::Json,
            "xml" => LanguageTag::Xml,
            "tsx" => LanguageTag::TypeScriptReact,
            "jsx" => LanguageTag::JavaScriptReact,
            "cpp" => LanguageTag::Cpp,
            "c" => LanguageTag::C,
            "txt" => LanguageTag::Text,
            _ => return None,
        };
        Some(tag)
    }

    /// Classify a file name or path by its extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        utils::path::extension(path.as_ref()).and_then(Self::from_extension)
    }

    /// Long name, as shown in the status bar on wide layouts
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageTag::Java => "Java",
            LanguageTag::JavaScript => "JavaScript",
            LanguageTag::TypeScript => "TypeScript",
            LanguageTag::Python => "Python",
            LanguageTag::Kotlin => "Kotlin",
            LanguageTag::Html => "HTML",
            LanguageTag::Css => "CSS",
            LanguageTag::Markdown => "Markdown",
            LanguageTag::Json => "JSON",
            LanguageTag::Xml => "XML",
            LanguageTag::TypeScriptReact => "TypeScript React",
            LanguageTag::JavaScriptReact => "JavaScript React",
            LanguageTag::Cpp => "C++",
            LanguageTag::C => "C",
            LanguageTag::Text => "Text",
        }
    }

    /// Abbreviation for narrow layouts
    pub fn short_name(&self) -> &'static str {
        match self {
            LanguageTag::Java => "Java",
            LanguageTag::JavaScript => "JS",
            LanguageTag::TypeScript => "TS",
            LanguageTag::Python => "PY",
            LanguageTag::Kotlin => "KT",
            LanguageTag::Html => "HTML",
            LanguageTag::Css => "CSS",
            LanguageTag::Markdown => "MD",
            LanguageTag::Json => "JSON",
            LanguageTag::Xml => "XML",
            LanguageTag::TypeScriptReact => "TSX",
            LanguageTag::JavaScriptReact => "JSX",
            LanguageTag::Cpp => "C++",
            LanguageTag::C => "C",
            LanguageTag::Text => "TXT",
        }
    }

    pub fn icon(&self) -> LanguageIcon {
        match self {
            LanguageTag::Java => LanguageIcon::Java,
            LanguageTag::JavaScript => LanguageIcon::JavaScript,
            LanguageTag::TypeScript => LanguageIcon::TypeScript,
            LanguageTag::Python => LanguageIcon::Python,
            LanguageTag::Kotlin => LanguageIcon::Kotlin,
            LanguageTag::Html => LanguageIcon::Html5,
            LanguageTag::Css => LanguageIcon::Css3,
            LanguageTag::Markdown => LanguageIcon::Markdown,
            LanguageTag::Json => LanguageIcon::Json,
            LanguageTag::Xml => LanguageIcon::Xml,
            LanguageTag::TypeScriptReact | LanguageTag::JavaScriptReact => LanguageIcon::React,
            LanguageTag::Cpp => LanguageIcon::CPlusPlus,
            LanguageTag::C => LanguageIcon::C,
            LanguageTag::Text => LanguageIcon::Text,
        }
    }

    /// Grammar identifier handed to the syntax highlighting widget
    pub fn highlight_grammar(&self) -> &'static str {
        match self {
            LanguageTag::Java => "java",
            LanguageTag::JavaScript => "javascript",
            LanguageTag::TypeScript => "typescript",
            LanguageTag::Python => "python",
            LanguageTag::Kotlin => "kotlin",
            LanguageTag::Html => "html",
            LanguageTag::Css => "css",
            LanguageTag::Markdown => "markdown",
            LanguageTag::Json => "json",
            LanguageTag::Xml => "xml",
            LanguageTag::TypeScriptReact => "tsx",
            LanguageTag::JavaScriptReact => "jsx",
            LanguageTag::Cpp => "cpp",
            LanguageTag::C => "c",
            LanguageTag::Text => "text",
        }
    }
}

/// Status bar label for a document without a language tag
pub const UNCLASSIFIED_DISPLAY_NAME: &str = "Plain Text";

/// Grammar used for a document without a language tag
pub const UNCLASSIFIED_GRAMMAR: &str = "text";

/// Display name for an optional tag
pub fn display_name(tag: Option<LanguageTag>) -> &'static str {
    tag.map_or(UNCLASSIFIED_DISPLAY_NAME, |t| t.display_name())
}

/// Icon for an optional tag
pub fn icon(tag: Option<LanguageTag>) -> LanguageIcon {
    tag.map_or(LanguageIcon::Text, |t| t.icon())
}

/// Highlighter grammar for an optional tag
pub fn highlight_grammar(tag: Option<LanguageTag>) -> &'static str {
    tag.map_or(UNCLASSIFIED_GRAMMAR, |t| t.highlight_grammar())
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a language name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageTag {
    type Err = UnknownLanguage;

    /// Parse a display name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl LanguageIcon {
    /// Single-glyph stand-in used by the terminal front-end
    pub fn glyph(&self) -> &'static str {
        match self {
            LanguageIcon::Java => "J",
            LanguageIcon::JavaScript => "JS",
            LanguageIcon::TypeScript => "TS",
            LanguageIcon::Python => "PY",
            LanguageIcon::Kotlin => "KT",
            LanguageIcon::Html5 => "<>",
            LanguageIcon::Css3 => "#",
            LanguageIcon::Markdown => "M",
            LanguageIcon::Json => "{}",
            LanguageIcon::Xml => "</>",
            LanguageIcon::React => "R",
            LanguageIcon::CPlusPlus => "C++",
            LanguageIcon::C => "C",
            LanguageIcon::Text => "T",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_table() {
        let cases = [
            ("ts", LanguageTag::TypeScript),
            ("scss", LanguageTag::Css),
            ("css", LanguageTag::Css),
            ("tsx", LanguageTag::TypeScriptReact),
            ("txt", LanguageTag::Text),
            ("MD", LanguageTag::Markdown),
        ];

        for (ext, tag) in cases {
            assert_eq!(LanguageTag::from_extension(ext), Some(tag), "{ext}");
        }
    }

    #[test]
    fn test_unknown_extension_is_unclassified() {
        assert_eq!(LanguageTag::from_extension("rs"), None);
        assert_eq!(LanguageTag::from_extension(""), None);
        assert_eq!(LanguageTag::from_path("Dockerfile"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            LanguageTag::from_path("src/hooks/useDebounce.ts"),
            Some(LanguageTag::TypeScript)
        );
        assert_eq!(
            LanguageTag::from_path("README.md"),
            Some(LanguageTag::Markdown)
        );
    }

    #[test]
    fn test_from_path_ignores_extension_case() {
        assert_eq!(LanguageTag::from_path("Main.JAVA"), Some(LanguageTag::Java));
        assert_eq!(
            LanguageTag::from_path("App.Tsx"),
            Some(LanguageTag::TypeScriptReact)
        );
    }

    #[test]
    fn test_react_variants_share_icon() {
        assert_eq!(LanguageTag::TypeScriptReact.icon(), LanguageIcon::React);
        assert_eq!(LanguageTag::JavaScriptReact.icon(), LanguageIcon::React);
        assert_eq!(LanguageTag::TypeScript.icon(), LanguageIcon::TypeScript);
    }

    #[test]
    fn test_unclassified_fallbacks() {
        assert_eq!(display_name(None), "Plain Text");
        assert_eq!(icon(None), LanguageIcon::Text);
        assert_eq!(highlight_grammar(None), "text");
        assert_eq!(display_name(Some(LanguageTag::Cpp)), "C++");
    }

    #[test]
    fn test_parse_display_name() {
        assert_eq!("typescript react".parse(), Ok(LanguageTag::TypeScriptReact));
        assert_eq!("HTML".parse(), Ok(LanguageTag::Html));
        assert!("Rust".parse::<LanguageTag>().is_err());
    }
}
