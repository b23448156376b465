//! File explorer projection
//!
//! A static tree of logical paths shown in the sidebar. Clicking a folder
//! toggles it; clicking a file yields the message that opens it as a tab.
//! Nothing here touches the filesystem.

use crate::language::{self, LanguageIcon, LanguageTag};
use crate::message::TabMessage;
use crate::state::DocumentDescriptor;
use crate::utils;
use log::trace;
use std::collections::HashSet;
use std::path::Path;

/// Heading rendered above the tree
pub const EXPLORER_TITLE: &str = "EXPLORER";

/// Indentation per depth level, in columns
const INDENT_PER_LEVEL: usize = 2;

/// Whether a node is a file or a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

/// A single entry in the file tree
#[derive(Debug, Clone, PartialEq)]
pub struct FileTreeNode {
    /// Display name (last path component)
    pub name: String,

    /// Logical path, unique within the tree
    pub path: String,

    pub kind: NodeKind,

    /// Language classified from the extension; always `None` for folders
    pub language: Option<LanguageTag>,

    /// Size shown in tooltips; `None` for folders
    pub size_bytes: Option<u64>,

    pub children: Vec<FileTreeNode>,
}

impl FileTreeNode {
    /// A file leaf
    pub fn file(path: impl Into<String>, size_bytes: u64) -> Self {
        let path = path.into();
        Self {
            name: node_name(&path),
            language: LanguageTag::from_path(&path),
            path,
            kind: NodeKind::File,
            size_bytes: Some(size_bytes),
            children: Vec::new(),
        }
    }

    /// A folder holding `children`
    pub fn folder(path: impl Into<String>, children: Vec<FileTreeNode>) -> Self {
        let path = path.into();
        Self {
            name: node_name(&path),
            path,
            kind: NodeKind::Folder,
            language: None,
            size_bytes: None,
            children,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Get human-readable file size
    pub fn display_size(&self) -> String {
        let Some(size) = self.size_bytes else {
            return String::new();
        };

        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if size >= GB {
            format!("{:.1} GB", size as f64 / GB as f64)
        } else if size >= MB {
            format!("{:.1} MB", size as f64 / MB as f64)
        } else if size >= KB {
            format!("{:.1} KB", size as f64 / KB as f64)
        } else {
            format!("{} B", size)
        }
    }

    /// `query` must already be lowercased; empty matches everything
    fn name_matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(query)
    }

    /// True if this node or any descendant matches
    fn matches_filter(&self, query: &str) -> bool {
        self.name_matches(query) || self.children.iter().any(|c| c.matches_filter(query))
    }

    fn find(&self, path: &str) -> Option<&FileTreeNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(path))
    }
}

fn node_name(path: &str) -> String {
    let name = utils::path::file_name(Path::new(path));
    name.unwrap_or_else(|| path.to_string())
}

/// Icon drawn in front of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeIcon {
    FolderOpen,
    FolderClosed,
    File(LanguageIcon),
}

impl TreeIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            TreeIcon::FolderOpen => "▾",
            TreeIcon::FolderClosed => "▸",
            TreeIcon::File(icon) => icon.glyph(),
        }
    }
}

/// One visible line of the flattened tree
#[derive(Debug, Clone, PartialEq)]
pub struct FileTreeRow {
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
    /// Nesting depth from the roots (0-based)
    pub depth: usize,
    pub icon: TreeIcon,
    pub selected: bool,
}

impl FileTreeRow {
    /// Plain-text rendering: selection marker, indentation, icon, name
    pub fn render(&self) -> String {
        let marker = if self.selected { '>' } else { ' ' };
        let indent = " ".repeat(self.depth * INDENT_PER_LEVEL);
        let glyph = self.icon.glyph();
        format!("{}{}{} {}", marker, indent, glyph, self.name)
    }
}

/// File explorer state
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    /// Top-level entries
    roots: Vec<FileTreeNode>,

    /// Paths of expanded folders
    expanded: HashSet<String>,

    /// Last file clicked
    selected: Option<String>,

    /// Search input text
    filter: String,
}

impl FileTree {
    /// Create a tree with every folder collapsed
    pub fn new(roots: Vec<FileTreeNode>) -> Self {
        Self {
            roots,
            ..Self::default()
        }
    }

    pub fn roots(&self) -> &[FileTreeNode] {
        &self.roots
    }

    /// Number of top-level entries, shown in the footer
    pub fn item_count(&self) -> usize {
        self.roots.len()
    }

    /// Look up a node by its logical path
    pub fn find(&self, path: &str) -> Option<&FileTreeNode> {
        self.roots.iter().find_map(|node| node.find(path))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Check if a folder is expanded
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn expand(&mut self, path: &str) {
        self.expanded.insert(path.to_string());
    }

    pub fn collapse(&mut self, path: &str) {
        self.expanded.remove(path);
    }

    /// Toggle folder expansion
    pub fn toggle_folder(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Handle a click on the row for `path`
    ///
    /// Folders toggle and yield nothing. Files become selected and yield
    /// the message that opens them, classified from their extension.
    /// Unknown paths are ignored.
    pub fn click(&mut self, path: &str) -> Option<TabMessage> {
        let kind = self.find(path)?.kind;
        match kind {
            NodeKind::Folder => {
                self.toggle_folder(path);
                None
            }
            NodeKind::File => {
                self.selected = Some(path.to_string());
                trace!("Opening {} from the explorer", path);
                Some(TabMessage::Open(DocumentDescriptor::for_path(path)))
            }
        }
    }

    /// Set the search text; matching is case-insensitive on names
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// Flatten the tree into the rows currently on screen
    ///
    /// Collapsed folders hide their children. While filtering, a node is
    /// kept if its name matches or, for folders, if any descendant does;
    /// a folder whose own name matches keeps all of its children.
    pub fn visible_rows(&self) -> Vec<FileTreeRow> {
        let query = self.filter.trim().to_lowercase();
        let mut rows = Vec::new();
        self.collect_rows(&self.roots, 0, &query, &mut rows);
        rows
    }

    fn collect_rows(
        &self,
        nodes: &[FileTreeNode],
        depth: usize,
        query: &str,
        rows: &mut Vec<FileTreeRow>,
    ) {
        for node in nodes.iter().filter(|n| n.matches_filter(query)) {
            let expanded = node.is_folder() && self.is_expanded(&node.path);
            rows.push(self.row(node, depth, expanded));

            if expanded {
                let own_match = node.name_matches(query);
                let child_query = if own_match { "" } else { query };
                self.collect_rows(&node.children, depth + 1, child_query, rows);
            }
        }
    }

    fn row(&self, node: &FileTreeNode, depth: usize, expanded: bool) -> FileTreeRow {
        let icon = match node.kind {
            NodeKind::Folder if expanded => TreeIcon::FolderOpen,
            NodeKind::Folder => TreeIcon::FolderClosed,
            NodeKind::File => TreeIcon::File(language::icon(node.language)),
        };

        FileTreeRow {
            name: node.name.clone(),
            path: node.path.clone(),
            kind: node.kind,
            depth,
            icon,
            selected: self.selected.as_deref() == Some(node.path.as_str()),
        }
    }

    /// Render the explorer: heading, visible rows and item count
    pub fn render(&self) -> String {
        let mut lines = vec![EXPLORER_TITLE.to_string()];
        lines.extend(self.visible_rows().iter().map(FileTreeRow::render));
        lines.push(format!("{} items", self.item_count()));
        lines.join("\n")
    }
}
