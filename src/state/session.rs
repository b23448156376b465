//! Document session management
//!
//! The session owns the ordered set of open documents and the active
//! selection. Every operation is total: unknown ids are ignored rather
//! than reported, because callers only ever hand back ids they were shown.
//!
//! Invariants held after every operation:
//! - the active id, when set, names a document in `documents`
//! - document ids are unique
//! - the active id is `None` exactly when `documents` is empty

use super::{Document, DocumentDescriptor, DocumentId};
use crate::config::SessionConfig;
use crate::message::{EditorMessage, Message, TabMessage};
use log::{debug, trace};

/// The ordered collection of open documents plus the active selection
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Open documents in tab order
    documents: Vec<Document>,

    /// Currently active document
    active: Option<DocumentId>,

    /// Display name for untitled documents
    untitled_name: String,

    /// Content for documents opened without any
    placeholder_content: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_config(&SessionConfig::default())
    }
}

impl Session {
    /// Create an empty session with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session using configured defaults for new documents
    pub fn with_config(config: &SessionConfig) -> Self {
        Self {
            documents: Vec::new(),
            active: None,
            untitled_name: config.untitled_name.clone(),
            placeholder_content: config.placeholder_content.clone(),
        }
    }

    /// Open a document at the end of the tab strip and make it active
    pub fn open(&mut self, descriptor: DocumentDescriptor) -> DocumentId {
        let document = Document::from_descriptor(descriptor, &self.placeholder_content);
        let id = document.id;

        debug!(
            "Opened document {} ({}) at position {}",
            document.display_name,
            id,
            self.documents.len()
        );

        self.documents.push(document);
        self.active = Some(id);
        id
    }

    /// Open an untitled document with placeholder content
    pub fn open_untitled(&mut self) -> DocumentId {
        let descriptor = DocumentDescriptor::new(self.untitled_name.clone());
        self.open(descriptor)
    }

    /// Close a document by ID
    ///
    /// When the active document is closed, the document that slides into
    /// its position becomes active; if it was the last tab, the new last
    /// tab does. Closing any other document leaves the selection alone.
    pub fn close(&mut self, id: DocumentId) -> Option<Document> {
        let Some(index) = self.position(id) else {
            trace!("Ignoring close of unknown document {}", id);
            return None;
        };

        let removed = self.documents.remove(index);

        if self.active == Some(id) {
            self.active = if self.documents.is_empty() {
                None
            } else {
                let replacement = index.min(self.documents.len() - 1);
                Some(self.documents[replacement].id)
            };
        }

        debug!(
            "Closed document {} ({}), active is now {:?}",
            removed.display_name, id, self.active
        );

        Some(removed)
    }

    /// Close the active document, if any
    pub fn close_active(&mut self) -> Option<Document> {
        self.active.and_then(|id| self.close(id))
    }

    /// Close every document except `keep`; no-op if `keep` is unknown
    pub fn close_others(&mut self, keep: DocumentId) {
        if !self.contains(keep) {
            trace!("Ignoring close-others for unknown document {}", keep);
            return;
        }

        self.documents.retain(|d| d.id == keep);
        self.active = Some(keep);
        debug!("Closed all documents except {}", keep);
    }

    /// Close every document to the right of `id`
    ///
    /// If the active document was among those closed, `id` becomes active.
    pub fn close_to_right(&mut self, id: DocumentId) {
        let Some(index) = self.position(id) else {
            trace!("Ignoring close-to-right for unknown document {}", id);
            return;
        };

        self.documents.truncate(index + 1);
        if self.active.map_or(false, |active| !self.contains(active)) {
            self.active = Some(id);
        }
        debug!("Closed documents to the right of {}", id);
    }

    /// Close every document
    pub fn close_all(&mut self) {
        self.documents.clear();
        self.active = None;
        debug!("Closed all documents");
    }

    /// Make a document active; no-op if the id is unknown
    pub fn select(&mut self, id: DocumentId) -> bool {
        if self.contains(id) {
            self.active = Some(id);
            trace!("Selected document {}", id);
            true
        } else {
            trace!("Ignoring select of unknown document {}", id);
            false
        }
    }

    /// Make the document at `index` active; no-op if out of range
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.documents.get(index) {
            Some(doc) => {
                self.active = Some(doc.id);
                true
            }
            None => false,
        }
    }

    /// Move to the next tab, wrapping around
    pub fn select_next(&mut self) {
        if self.documents.is_empty() {
            return;
        }

        let next = match self.active_index() {
            Some(active) => (active + 1) % self.documents.len(),
            None => 0,
        };
        self.active = Some(self.documents[next].id);
    }

    /// Move to the previous tab, wrapping around
    pub fn select_previous(&mut self) {
        if self.documents.is_empty() {
            return;
        }

        let last = self.documents.len() - 1;
        let previous = match self.active_index() {
            Some(0) | None => last,
            Some(active) => active - 1,
        };
        self.active = Some(self.documents[previous].id);
    }

    /// Replace a document's content and mark it modified
    ///
    /// Neither the selection nor the tab order changes. Returns `false`
    /// and leaves the session untouched if the id is unknown.
    pub fn edit(&mut self, id: DocumentId, content: &str) -> bool {
        match self.documents.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.replace_content(content);
                trace!("Edited document {} ({} chars)", id, doc.char_count());
                true
            }
            None => {
                trace!("Ignoring edit of unknown document {}", id);
                false
            }
        }
    }

    /// Move a document so it ends up at index `to` (drag reordering)
    ///
    /// Out-of-range indices are ignored. The active document is tracked by
    /// id, so it stays active wherever it moves.
    pub fn move_document(&mut self, from: usize, to: usize) {
        if from >= self.documents.len() || to >= self.documents.len() || from == to {
            return;
        }

        let doc = self.documents.remove(from);
        self.documents.insert(to, doc);
        debug!("Moved document from position {} to {}", from, to);
    }

    /// Apply a message emitted by a presentational collaborator
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tab(msg) => self.handle_tab_message(msg),
            Message::Editor(msg) => self.handle_editor_message(msg),
        }
    }

    fn handle_tab_message(&mut self, message: TabMessage) {
        match message {
            TabMessage::Open(descriptor) => {
                self.open(descriptor);
            }
            TabMessage::New => {
                self.open_untitled();
            }
            TabMessage::Select(id) => {
                self.select(id);
            }
            TabMessage::SelectIndex(index) => {
                self.select_index(index);
            }
            TabMessage::Next => self.select_next(),
            TabMessage::Previous => self.select_previous(),
            TabMessage::Close(id) => {
                self.close(id);
            }
            TabMessage::CloseCurrent => {
                self.close_active();
            }
            TabMessage::CloseAll => self.close_all(),
            TabMessage::CloseOthers(id) => self.close_others(id),
            TabMessage::CloseToRight(id) => self.close_to_right(id),
            TabMessage::Move { from, to } => self.move_document(from, to),
        }
    }

    fn handle_editor_message(&mut self, message: EditorMessage) {
        match message {
            EditorMessage::Edit { id, content } => {
                self.edit(id, &content);
            }
        }
    }

    /// Open documents in tab order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Iterate over open documents in tab order
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Get all document IDs in order
    pub fn document_ids(&self) -> Vec<DocumentId> {
        self.documents.iter().map(|d| d.id).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get a document by ID
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.position(id).is_some()
    }

    /// Find a document's index in tab order
    pub fn position(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|d| d.id == id)
    }

    /// Currently active document ID
    pub fn active_document_id(&self) -> Option<DocumentId> {
        self.active
    }

    /// Get the currently active document
    pub fn active_document(&self) -> Option<&Document> {
        self.active.and_then(|id| self.get(id))
    }

    /// Index of the active document in tab order
    pub fn active_index(&self) -> Option<usize> {
        self.active.and_then(|id| self.position(id))
    }

    /// Number of documents with edits
    pub fn modified_count(&self) -> usize {
        self.documents.iter().filter(|d| d.modified).count()
    }

    /// Check if any documents have been edited
    pub fn has_unsaved_changes(&self) -> bool {
        self.documents.iter().any(|d| d.modified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTag;

    fn session_with(names: &[&str]) -> (Session, Vec<DocumentId>) {
        let mut session = Session::new();
        let ids = names
            .iter()
            .map(|name| session.open(DocumentDescriptor::new(*name)))
            .collect();
        (session, ids)
    }

    fn assert_invariants(session: &Session) {
        match session.active_document_id() {
            Some(id) => assert!(session.contains(id), "active id must be present"),
            None => assert!(
                session.is_empty(),
                "active id must be set while documents remain"
            ),
        }
        let mut ids = session.document_ids();
        ids.sort_by_key(|id| *id.as_uuid());
        ids.dedup();
        assert_eq!(ids.len(), session.len(), "ids must be unique");
    }

    #[test]
    fn test_open_appends_in_call_order() {
        let (session, ids) = session_with(&["a.ts", "b.ts", "c.ts", "d.ts"]);

        assert_eq!(session.len(), 4);
        assert_eq!(session.document_ids(), ids);
        let names: Vec<_> = session.iter().map(|d| d.display_name.as_str()).collect();
        assert_eq!(names, ["a.ts", "b.ts", "c.ts", "d.ts"]);
        assert_invariants(&session);
    }

    #[test]
    fn test_open_activates_new_document() {
        let mut session = Session::new();
        for name in ["one", "two", "three"] {
            let id = session.open(DocumentDescriptor::new(name));
            assert_eq!(session.active_document_id(), Some(id));
        }
    }

    #[test]
    fn test_open_defaults() {
        let mut session = Session::new();
        let id = session.open_untitled();
        let doc = session.get(id).unwrap();

        assert_eq!(doc.display_name, "untitled.txt");
        assert_eq!(doc.content_str(), "Not editable (Read only)");
        assert_eq!(doc.language, None);
        assert!(!doc.modified);
    }

    #[test]
    fn test_open_uses_configured_defaults() {
        let config = SessionConfig {
            untitled_name: "scratch".to_string(),
            placeholder_content: String::new(),
            seed_sample: false,
        };
        let mut session = Session::with_config(&config);
        let id = session.open_untitled();

        let doc = session.get(id).unwrap();
        assert_eq!(doc.display_name, "scratch");
        assert_eq!(doc.content_str(), "");
    }

    #[test]
    fn test_open_without_language_stays_unclassified() {
        let mut session = Session::new();
        let id = session.open(DocumentDescriptor::new("main.py").content("print()"));
        assert_eq!(session.get(id).unwrap().language, None);
    }

    #[test]
    fn test_duplicate_display_names_allowed() {
        let (session, ids) = session_with(&["same", "same"]);
        assert_eq!(session.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_close_active_middle_selects_right_neighbour() {
        let (mut session, ids) = session_with(&["A", "B", "C"]);
        session.select(ids[1]);

        let closed = session.close(ids[1]).unwrap();

        assert_eq!(closed.display_name, "B");
        assert_eq!(session.document_ids(), vec![ids[0], ids[2]]);
        assert_eq!(session.active_document_id(), Some(ids[2]));
        assert_invariants(&session);
    }

    #[test]
    fn test_close_active_last_selects_left_neighbour() {
        let (mut session, ids) = session_with(&["A", "B", "C"]);
        assert_eq!(session.active_document_id(), Some(ids[2]));

        session.close(ids[2]);

        assert_eq!(session.active_document_id(), Some(ids[1]));
        assert_invariants(&session);
    }

    #[test]
    fn test_close_active_first_selects_new_first() {
        let (mut session, ids) = session_with(&["A", "B", "C"]);
        session.select(ids[0]);

        session.close(ids[0]);

        assert_eq!(session.active_document_id(), Some(ids[1]));
    }

    #[test]
    fn test_close_inactive_keeps_selection() {
        let (mut session, ids) = session_with(&["A", "B", "C"]);
        session.select(ids[2]);

        session.close(ids[0]);

        assert_eq!(session.active_document_id(), Some(ids[2]));
        assert_eq!(session.active_index(), Some(1));
    }

    #[test]
    fn test_close_last_remaining_document() {
        let (mut session, ids) = session_with(&["only"]);

        session.close(ids[0]);

        assert!(session.is_empty());
        assert_eq!(session.active_document_id(), None);
        assert!(session.active_document().is_none());
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let (mut session, ids) = session_with(&["A", "B"]);
        session.edit(ids[0], "changed");
        let before = session.clone();

        assert!(session.close(DocumentId::new()).is_none());

        assert_eq!(session, before);
    }

    #[test]
    fn test_close_every_active_document_in_turn() {
        let (mut session, _) = session_with(&["A", "B", "C", "D", "E"]);
        session.select_index(2);

        while let Some(active) = session.active_document_id() {
            session.close(active);
            assert_invariants(&session);
        }
        assert!(session.is_empty());
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let (mut session, ids) = session_with(&["A", "B"]);

        assert!(!session.select(DocumentId::new()));
        assert_eq!(session.active_document_id(), Some(ids[1]));

        assert!(session.select(ids[0]));
        assert_eq!(session.active_document_id(), Some(ids[0]));
    }

    #[test]
    fn test_select_index_out_of_range() {
        let (mut session, ids) = session_with(&["A", "B"]);
        assert!(!session.select_index(5));
        assert_eq!(session.active_document_id(), Some(ids[1]));
    }

    #[test]
    fn test_edit_overwrites_and_marks_modified() {
        let (mut session, ids) = session_with(&["A", "B"]);

        assert!(session.edit(ids[0], "first"));
        assert!(session.edit(ids[0], "second"));

        let doc = session.get(ids[0]).unwrap();
        assert!(doc.modified);
        assert_eq!(doc.content_str(), "second");
        assert!(!session.get(ids[1]).unwrap().modified);
        assert_eq!(session.modified_count(), 1);
        assert!(session.has_unsaved_changes());
    }

    #[test]
    fn test_edit_keeps_selection_and_order() {
        let (mut session, ids) = session_with(&["A", "B", "C"]);

        session.edit(ids[0], "text");

        assert_eq!(session.active_document_id(), Some(ids[2]));
        assert_eq!(session.document_ids(), ids);
    }

    #[test]
    fn test_edit_unknown_is_noop() {
        let (mut session, _) = session_with(&["A"]);
        let before = session.clone();

        assert!(!session.edit(DocumentId::new(), "text"));

        assert_eq!(session, before);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_next_prev_wrap_around() {
        let (mut session, ids) = session_with(&["1", "2", "3"]);
        session.select_index(0);

        session.select_next();
        assert_eq!(session.active_document_id(), Some(ids[1]));

        session.select_next();
        session.select_next();
        assert_eq!(session.active_document_id(), Some(ids[0])); // Wraps around

        session.select_previous();
        assert_eq!(session.active_document_id(), Some(ids[2])); // Wraps around
    }

    #[test]
    fn test_next_prev_on_empty_session() {
        let mut session = Session::new();
        session.select_next();
        session.select_previous();
        assert_eq!(session.active_document_id(), None);
    }

    #[test]
    fn test_move_document_keeps_active() {
        let (mut session, ids) = session_with(&["1", "2", "3"]);
        session.select(ids[0]);

        session.move_document(0, 2);

        assert_eq!(session.document_ids(), vec![ids[1], ids[2], ids[0]]);
        assert_eq!(session.active_document_id(), Some(ids[0]));
        assert_eq!(session.active_index(), Some(2));

        session.move_document(0, 9);
        assert_eq!(session.document_ids(), vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn test_close_others() {
        let (mut session, ids) = session_with(&["1", "2", "3"]);

        session.close_others(ids[1]);

        assert_eq!(session.document_ids(), vec![ids[1]]);
        assert_eq!(session.active_document_id(), Some(ids[1]));

        session.close_others(DocumentId::new());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_close_to_right_moves_selection_back() {
        let (mut session, ids) = session_with(&["1", "2", "3", "4"]);

        session.close_to_right(ids[1]);

        assert_eq!(session.document_ids(), vec![ids[0], ids[1]]);
        assert_eq!(session.active_document_id(), Some(ids[1]));
        assert_invariants(&session);
    }

    #[test]
    fn test_close_to_right_keeps_selection_on_left() {
        let (mut session, ids) = session_with(&["1", "2", "3"]);
        session.select(ids[0]);

        session.close_to_right(ids[1]);

        assert_eq!(session.active_document_id(), Some(ids[0]));
    }

    #[test]
    fn test_close_all() {
        let (mut session, _) = session_with(&["1", "2"]);
        session.close_all();
        assert!(session.is_empty());
        assert_eq!(session.active_document_id(), None);
    }

    #[test]
    fn test_update_dispatches_messages() {
        let mut session = Session::new();

        let descriptor = DocumentDescriptor::for_path("src/app.ts");
        session.update(TabMessage::Open(descriptor).into());
        session.update(TabMessage::New.into());
        assert_eq!(session.len(), 2);

        let first = session.document_ids()[0];
        session.update(TabMessage::Select(first).into());
        assert_eq!(session.active_document_id(), Some(first));

        session.update(
            EditorMessage::Edit {
                id: first,
                content: "export {}".to_string(),
            }
            .into(),
        );
        assert!(session.get(first).unwrap().modified);
        assert_eq!(
            session.get(first).unwrap().language,
            Some(LanguageTag::TypeScript)
        );

        session.update(TabMessage::CloseCurrent.into());
        assert_eq!(session.len(), 1);
        assert!(!session.contains(first));
        assert_invariants(&session);
    }
}
