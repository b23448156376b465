//! UI projections for Axion
//!
//! Read-only views that presentational collaborators render:
//! - Tab bar
//! - Status bar
//! - Editing surface
//! - File explorer
//! - JSON snapshot
//!
//! None of these mutate the session; interactions come back as messages.

mod editor_view;
mod file_tree;
mod snapshot;
mod status_bar;
mod tab_bar;

use crate::config::UiConfig;
use crate::state::Session;

pub use editor_view::{EditorView, EMPTY_HINT, EMPTY_TITLE};
pub use file_tree::{FileTree, FileTreeNode, FileTreeRow, NodeKind, TreeIcon, EXPLORER_TITLE};
pub use snapshot::{DocumentSnapshot, SessionSnapshot};
pub use status_bar::{StatusBar, StatusBarInfo};
pub use tab_bar::{TabBar, TabContextAction, TabInfo};

/// Render the whole shell: tab strip, editing surface and status bar
pub fn view(session: &Session, config: &UiConfig) -> String {
    let tabs = TabBar::render(session, config);
    let rule = "-".repeat(tabs.chars().count().max(20));

    [
        tabs,
        rule.clone(),
        EditorView::from_session(session).render(),
        rule,
        StatusBar::render(session),
    ]
    .join("\n")
}
