//! Knowledge-base folder tree.
//!
//! Folders nest to any depth. The tree is stored as an arena of
//! [`FolderNode`]s with parent links and ordered child lists, so expansion
//! state can be flipped in place by folder id.

mod tree;

pub use tree::{FolderNode, FolderRow, KnowledgeTree, TreeRow, TreeTotals};

/// Errors raised while building or mutating a [`KnowledgeTree`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnowledgeError {
    /// Two folders share an id.
    #[error("duplicate folder id: {0}")]
    DuplicateFolder(String),

    /// Two files share an id.
    #[error("duplicate file id: {0}")]
    DuplicateFile(String),

    /// No folder with this id exists.
    #[error("unknown folder: {0}")]
    UnknownFolder(String),
}
