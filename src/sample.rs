//! Sample workspace
//!
//! The shell starts with a few documents open so the tab strip and editor
//! have something to show, next to a small project in the explorer.

use crate::config::SessionConfig;
use crate::language::LanguageTag;
use crate::state::{DocumentDescriptor, Session};
use crate::ui::{FileTree, FileTreeNode};

const INDEX_TSX: &str = r#"import React from 'react';

const Index = () => {
  return (
    <div className="h-full flex items-center justify-center">
      <h1 className="text-2xl font-bold">Welcome to Axion</h1>
    </div>
  );
};

export default Index;"#;

const STYLE_CSS: &str = r#"/* Add your CSS styles here */
body {
  background-color: #f0f0f0;
  color: #333;
}"#;

const README_MD: &str = r#"# Axion
This is a simple code editor shell with syntax highlighting."#;

/// Documents in the sample workspace, in tab order
pub fn sample_documents() -> Vec<DocumentDescriptor> {
    vec![
        DocumentDescriptor::new("index.tsx")
            .language(LanguageTag::TypeScriptReact)
            .content(INDEX_TSX),
        DocumentDescriptor::new("style.css")
            .language(LanguageTag::Css)
            .content(STYLE_CSS),
        DocumentDescriptor::new("README.md")
            .language(LanguageTag::Markdown)
            .content(README_MD),
    ]
}

/// Build a session holding the sample workspace
///
/// `style.css` starts with unsaved edits and `index.tsx` is active.
pub fn sample_session(config: &SessionConfig) -> Session {
    let mut session = Session::with_config(config);
    let ids: Vec<_> = sample_documents()
        .into_iter()
        .map(|descriptor| session.open(descriptor))
        .collect();

    session.edit(ids[1], STYLE_CSS);
    session.select(ids[0]);
    session
}

/// Project shown in the explorer, with `src` expanded
pub fn sample_tree() -> FileTree {
    let roots = vec![
        FileTreeNode::folder(
            "src",
            vec![
                FileTreeNode::folder(
                    "src/components",
                    vec![
                        FileTreeNode::file("src/components/App.tsx", 2048),
                        FileTreeNode::file("src/components/Header.tsx", 1024),
                        FileTreeNode::file("src/components/Sidebar.tsx", 1536),
                    ],
                ),
                FileTreeNode::folder(
                    "src/hooks",
                    vec![
                        FileTreeNode::file("src/hooks/useLocalStorage.ts", 512),
                        FileTreeNode::file("src/hooks/useDebounce.ts", 256),
                    ],
                ),
                FileTreeNode::file("src/index.tsx", 384),
                FileTreeNode::file("src/App.css", 1024),
                FileTreeNode::file("src/utils.ts", 768),
            ],
        ),
        FileTreeNode::folder(
            "public",
            vec![
                FileTreeNode::file("public/index.html", 1024),
                FileTreeNode::file("public/favicon.ico", 64),
            ],
        ),
        FileTreeNode::file("package.json", 2048),
        FileTreeNode::file("tsconfig.json", 512),
        FileTreeNode::file("README.md", 1024),
        FileTreeNode::file(".gitignore", 256),
    ];

    let mut tree = FileTree::new(roots);
    tree.expand("src");
    tree
}
