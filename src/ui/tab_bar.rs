//! Tab bar component
//!
//! Projects the open documents into tab descriptors and renders them as a
//! single text line. Closing and selecting are expressed as messages.

use crate::config::UiConfig;
use crate::language::{self, LanguageIcon};
use crate::message::TabMessage;
use crate::state::{Document, DocumentId, Session};
use crate::utils::text::truncate;

/// Information about a single tab
#[derive(Debug, Clone, PartialEq)]
pub struct TabInfo {
    /// Document ID
    pub id: DocumentId,
    /// Display title (file name)
    pub title: String,
    /// Whether the document has been edited
    pub is_modified: bool,
    /// Logical path, for tooltips
    pub path: String,
    /// Icon chosen from the language tag
    pub icon: LanguageIcon,
}

impl TabInfo {
    /// Build tab info from a document
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id,
            title: doc.display_name.clone(),
            is_modified: doc.modified,
            path: doc.path.clone(),
            icon: language::icon(doc.language),
        }
    }

    /// Get display title with modification indicator
    pub fn display_title(&self) -> String {
        if self.is_modified {
            format!("● {}", self.title)
        } else {
            self.title.clone()
        }
    }

    /// Title as rendered in the strip, honouring width and indicator settings
    pub fn label(&self, config: &UiConfig) -> String {
        let title = truncate(&self.title, config.max_tab_title_chars);
        if self.is_modified && config.show_modified_indicator {
            format!("{} {} ●", self.icon.glyph(), title)
        } else {
            format!("{} {}", self.icon.glyph(), title)
        }
    }
}

/// Tab bar
pub struct TabBar;

impl TabBar {
    /// Tab descriptors in strip order
    pub fn tabs(session: &Session) -> Vec<TabInfo> {
        session.iter().map(TabInfo::from_document).collect()
    }

    /// Render the strip, bracketing the active tab
    pub fn render(session: &Session, config: &UiConfig) -> String {
        if session.is_empty() {
            return "No files open".to_string();
        }

        let active = session.active_document_id();
        Self::tabs(session)
            .iter()
            .map(|tab| {
                let label = tab.label(config);
                if Some(tab.id) == active {
                    format!("[{}]", label)
                } else {
                    format!(" {} ", label)
                }
            })
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Tab context menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabContextAction {
    /// Close this tab
    Close,
    /// Close all other tabs
    CloseOthers,
    /// Close tabs to the right
    CloseToRight,
    /// Close all tabs
    CloseAll,
}

impl TabContextAction {
    /// Get display label for the action
    pub fn label(&self) -> &'static str {
        match self {
            Self::Close => "Close",
            Self::CloseOthers => "Close Others",
            Self::CloseToRight => "Close to the Right",
            Self::CloseAll => "Close All",
        }
    }

    /// Message emitted when the action is picked on the tab for `id`
    pub fn message(&self, id: DocumentId) -> TabMessage {
        match self {
            Self::Close => TabMessage::Close(id),
            Self::CloseOthers => TabMessage::CloseOthers(id),
            Self::CloseToRight => TabMessage::CloseToRight(id),
            Self::CloseAll => TabMessage::CloseAll,
        }
    }
}
