//! Editing surface projection
//!
//! The highlighter and text widget only ever see this read-only view of the
//! active document. Keystrokes flow back as [`EditorMessage`]s.

use crate::language;
use crate::message::EditorMessage;
use crate::state::{DocumentId, Session};

/// Headline shown when no document is open
pub const EMPTY_TITLE: &str = "No files open";

/// Hint shown below [`EMPTY_TITLE`]
pub const EMPTY_HINT: &str = "Open a file from the sidebar or create a new one";

/// What the editing surface should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorView {
    /// No documents are open
    Empty,

    /// The active document's text and the grammar to highlight it with
    Document {
        id: DocumentId,
        content: String,
        grammar: &'static str,
    },
}

impl EditorView {
    /// Project the active document of `session`
    pub fn from_session(session: &Session) -> Self {
        match session.active_document() {
            Some(doc) => EditorView::Document {
                id: doc.id,
                content: doc.content_str(),
                grammar: language::highlight_grammar(doc.language),
            },
            None => EditorView::Empty,
        }
    }

    /// Message to emit when the user changes the shown text
    pub fn on_input(&self, content: impl Into<String>) -> Option<EditorMessage> {
        match self {
            EditorView::Document { id, .. } => Some(EditorMessage::Edit {
                id: *id,
                content: content.into(),
            }),
            EditorView::Empty => None,
        }
    }

    /// Plain-text rendering for the terminal front-end
    pub fn render(&self) -> String {
        match self {
            EditorView::Empty => format!("{}\n{}", EMPTY_TITLE, EMPTY_HINT),
            EditorView::Document { content, .. } => content
                .lines()
                .enumerate()
                .map(|(i, line)| format!("{:>4} | {}", i + 1, line))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
