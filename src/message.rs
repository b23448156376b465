//! Session message types
//!
//! Presentational collaborators never mutate the session directly. They
//! emit these messages from their event callbacks and the owner of the
//! session applies them with [`Session::update`](crate::state::Session::update).

use crate::state::{DocumentDescriptor, DocumentId};

/// Main message enum
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Tab strip interactions
    Tab(TabMessage),

    /// Text-editing surface interactions
    Editor(EditorMessage),
}

/// Messages emitted by the tab strip
#[derive(Debug, Clone, PartialEq)]
pub enum TabMessage {
    /// Open a document described by the caller
    Open(DocumentDescriptor),

    /// Open an untitled document with placeholder content
    New,

    /// Select a tab by document ID
    Select(DocumentId),

    /// Select a tab by index
    SelectIndex(usize),

    /// Switch to next tab
    Next,

    /// Switch to previous tab
    Previous,

    /// Close a tab
    Close(DocumentId),

    /// Close current tab
    CloseCurrent,

    /// Close all tabs
    CloseAll,

    /// Close other tabs
    CloseOthers(DocumentId),

    /// Close tabs to the right
    CloseToRight(DocumentId),

    /// Reorder a tab (drag and drop)
    Move { from: usize, to: usize },
}

/// Messages emitted by the text-editing surface
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMessage {
    /// Replace the full content of a document
    Edit { id: DocumentId, content: String },
}

impl From<TabMessage> for Message {
    fn from(msg: TabMessage) -> Self {
        Message::Tab(msg)
    }
}

impl From<EditorMessage> for Message {
    fn from(msg: EditorMessage) -> Self {
        Message::Editor(msg)
    }
}
