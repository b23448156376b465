//! Status bar component
//!
//! Displays language mode, document statistics, encoding and line endings
//! for the active document.

use crate::language;
use crate::state::Session;

/// Information to display in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarInfo {
    /// Language display name (or "Plain Text")
    pub language: String,
    /// Abbreviated language for narrow layouts
    pub language_short: String,
    /// Total line count
    pub line_count: usize,
    /// Total character count
    pub char_count: usize,
    /// Whether the active document is modified
    pub is_modified: bool,
    /// Number of open documents
    pub open_documents: usize,
    /// Number of modified documents
    pub modified_documents: usize,
    /// File encoding
    pub encoding: &'static str,
    /// Line ending style
    pub line_ending: &'static str,
}

impl StatusBarInfo {
    /// Build status information for the active document, if any
    pub fn from_session(session: &Session) -> Option<Self> {
        let doc = session.active_document()?;

        Some(Self {
            language: language::display_name(doc.language).to_string(),
            language_short: doc
                .language
                .map_or("TXT", |tag| tag.short_name())
                .to_string(),
            line_count: doc.line_count(),
            char_count: doc.char_count(),
            is_modified: doc.modified,
            open_documents: session.len(),
            modified_documents: session.modified_count(),
            encoding: "UTF-8",
            line_ending: "LF",
        })
    }

    /// Format document statistics
    pub fn stats_display(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.line_count,
            plural(self.line_count, "line", "lines"),
            self.char_count,
            plural(self.char_count, "char", "chars")
        )
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    match count {
        1 => one,
        _ => many,
    }
}

/// Status bar
pub struct StatusBar;

impl StatusBar {
    /// Render the status line; empty sessions show only the document count
    pub fn render(session: &Session) -> String {
        let Some(info) = StatusBarInfo::from_session(session) else {
            return "0 open".to_string();
        };

        let mut parts = vec![format!("{} open", info.open_documents)];
        if info.modified_documents > 0 {
            parts.push(format!("{} modified", info.modified_documents));
        }
        if info.is_modified {
            parts.push("●".to_string());
        }
        parts.push(info.stats_display());
        parts.push(info.encoding.to_string());
        parts.push(info.line_ending.to_string());
        parts.push(info.language);

        parts.join("  ")
    }
}
