//! Serializable session snapshot
//!
//! A JSON view of the session for debugging and for hosts that render the
//! shell out of process. It is output only; sessions are never restored
//! from it.

use crate::error::SnapshotError;
use crate::language;
use crate::state::{Document, Session};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One document in a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSnapshot {
    pub id: String,
    pub display_name: String,
    pub path: String,
    pub language: Option<String>,
    pub content: String,
    pub is_modified: bool,
    pub opened_at: DateTime<Utc>,
}

impl From<&Document> for DocumentSnapshot {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.to_string(),
            display_name: doc.display_name.clone(),
            path: doc.path.clone(),
            language: doc.language.map(|tag| tag.display_name().to_string()),
            content: doc.content_str(),
            is_modified: doc.modified,
            opened_at: doc.opened_at,
        }
    }
}

/// The whole session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub documents: Vec<DocumentSnapshot>,
    /// Empty string when no document is open
    pub active_document_id: String,
    pub active_language: &'static str,
}

impl SessionSnapshot {
    pub fn from_session(session: &Session) -> Self {
        Self {
            documents: session.iter().map(DocumentSnapshot::from).collect(),
            active_document_id: session
                .active_document_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            active_language: language::display_name(
                session.active_document().and_then(|d| d.language),
            ),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(SnapshotError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTag;
    use crate::state::DocumentDescriptor;

    #[test]
    fn test_empty_snapshot() {
        let snapshot = SessionSnapshot::from_session(&Session::new());
        assert!(snapshot.documents.is_empty());
        assert_eq!(snapshot.active_document_id, "");
        assert_eq!(snapshot.active_language, "Plain Text");
    }

    #[test]
    fn test_snapshot_json_fields() {
        let mut session = Session::new();
        let id = session.open(
            DocumentDescriptor::new("README.md")
                .language(LanguageTag::Markdown)
                .content("# Axion"),
        );
        session.open(DocumentDescriptor::new("untitled.txt"));
        session.select(id);

        let json = SessionSnapshot::from_session(&session).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["active_document_id"], id.to_string());
        assert_eq!(value["active_language"], "Markdown");
        assert_eq!(value["documents"][0]["language"], "Markdown");
        assert_eq!(value["documents"][0]["content"], "# Axion");
        assert_eq!(value["documents"][1]["language"], serde_json::Value::Null);
        assert_eq!(value["documents"][1]["is_modified"], false);
    }
}
