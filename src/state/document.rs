//! Open documents
//!
//! A document is an in-memory text buffer with identity, a presentation
//! label, an optional language tag and a modification flag. It is never
//! read from or written to disk.

use crate::language::LanguageTag;
use crate::utils;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Unique identifier for documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Create a new unique document ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the caller knows about a document it wants opened
///
/// Fields left unset are filled in by the session: the path falls back to
/// the display name and the content to the configured placeholder text.
/// The language tag is never inferred here unless the descriptor was built
/// with [`DocumentDescriptor::for_path`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentDescriptor {
    pub display_name: String,
    pub path: Option<String>,
    pub language: Option<LanguageTag>,
    pub content: Option<String>,
}

impl DocumentDescriptor {
    /// Describe a document with the given tab label
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Describe a document opened from a logical path, classifying its
    /// language from the file-name extension
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let display_name =
            utils::path::file_name(path).unwrap_or_else(|| path.to_string_lossy().to_string());

        Self {
            display_name,
            path: Some(path.to_string_lossy().to_string()),
            language: LanguageTag::from_path(path),
            content: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn language(mut self, language: LanguageTag) -> Self {
        self.language = Some(language);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// A single open document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Unique identifier for this document
    pub id: DocumentId,

    /// Label shown on the tab
    pub display_name: String,

    /// Logical location, informational only
    pub path: String,

    /// Presentation-only classification; `None` means unclassified
    pub language: Option<LanguageTag>,

    /// Document content as a rope
    pub content: ropey::Rope,

    /// Whether the document has been edited since it was opened
    pub modified: bool,

    /// When the document was opened
    pub opened_at: DateTime<Utc>,
}

impl Document {
    /// Create a document from a descriptor, falling back to
    /// `placeholder` when the descriptor carries no content
    pub fn from_descriptor(descriptor: DocumentDescriptor, placeholder: &str) -> Self {
        let DocumentDescriptor {
            display_name,
            path,
            language,
            content,
        } = descriptor;

        let content = content.as_deref().unwrap_or(placeholder);

        Self {
            id: DocumentId::new(),
            path: path.unwrap_or_else(|| display_name.clone()),
            display_name,
            language,
            content: ropey::Rope::from_str(content),
            modified: false,
            opened_at: Utc::now(),
        }
    }

    /// Get the document title for display (with modification indicator)
    pub fn title(&self) -> String {
        if self.modified {
            format!("● {}", self.display_name)
        } else {
            self.display_name.clone()
        }
    }

    /// Replace the whole content and mark the document modified
    pub fn replace_content(&mut self, content: &str) {
        self.content = ropey::Rope::from_str(content);
        self.modified = true;
    }

    /// Get content as string
    pub fn content_str(&self) -> String {
        self.content.to_string()
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.content.len_lines()
    }

    /// Get character count
    pub fn char_count(&self) -> usize {
        self.content.len_chars()
    }
}
