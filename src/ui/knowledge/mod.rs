//! Knowledge-base column: header, inert search, folder tree, inert upload.

mod panel;
mod tree;

pub use panel::KnowledgeBasePanel;
pub use tree::{KnowledgeTreeView, TREE_ELEMENT_ID};
