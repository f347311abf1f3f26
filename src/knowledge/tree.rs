//! Arena-backed folder tree with expansion state.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::KnowledgeError;
use crate::model::{DocumentFile, Folder};

/// A folder stored in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub id: String,
    pub name: String,
    pub file_count: usize,
    pub is_expanded: bool,
    pub files: Vec<DocumentFile>,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl FolderNode {
    /// Whether the displayed count agrees with the known files.
    #[must_use]
    pub fn is_count_consistent(&self) -> bool {
        self.files.is_empty() || self.files.len() == self.file_count
    }
}

/// Header data of a visible folder row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRow {
    pub id: String,
    pub name: String,
    pub file_count: usize,
    pub is_expanded: bool,
}

/// One visible row of the rendered tree, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    Folder {
        folder: FolderRow,
        /// Nesting depth, 0 for top-level folders.
        depth: usize,
        /// Top-level folder preceded by another top-level folder.
        separated: bool,
    },
    File {
        file: DocumentFile,
        folder_id: String,
        depth: usize,
    },
}

impl TreeRow {
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Folder { depth, .. } | Self::File { depth, .. } => *depth,
        }
    }
}

/// Aggregate counts shown in headers and the navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeTotals {
    /// Folders at every depth.
    pub folders: usize,
    /// Sum of displayed folder counts.
    pub files: usize,
    /// Sum of chunks over known files.
    pub chunks: u64,
}

/// Folder hierarchy with per-folder expansion flags.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTree {
    nodes: Vec<FolderNode>,
    roots: Vec<usize>,
    index: HashMap<String, usize>,
}

impl KnowledgeTree {
    /// Build a tree from nested folders, preserving input order.
    pub fn from_folders(folders: Vec<Folder>) -> Result<Self, KnowledgeError> {
        let mut tree = Self::default();
        let mut file_ids = HashSet::new();
        for folder in folders {
            let idx = tree.insert(folder, None, &mut file_ids)?;
            tree.roots.push(idx);
        }
        Ok(tree)
    }

    fn insert(
        &mut self,
        folder: Folder,
        parent: Option<usize>,
        file_ids: &mut HashSet<String>,
    ) -> Result<usize, KnowledgeError> {
        let Folder {
            id,
            name,
            file_count,
            is_expanded,
            files,
            folders,
        } = folder;

        if self.index.contains_key(&id) {
            return Err(KnowledgeError::DuplicateFolder(id));
        }
        for file in &files {
            if !file_ids.insert(file.id.clone()) {
                return Err(KnowledgeError::DuplicateFile(file.id.clone()));
            }
        }

        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(FolderNode {
            id,
            name,
            file_count,
            is_expanded,
            files,
            parent,
            children: Vec::new(),
        });

        for child in folders {
            let child_idx = self.insert(child, Some(idx), file_ids)?;
            self.nodes[idx].children.push(child_idx);
        }
        Ok(idx)
    }

    /// Rebuild the nested folder shape.
    #[must_use]
    pub fn to_folders(&self) -> Vec<Folder> {
        self.roots.iter().map(|&idx| self.to_folder(idx)).collect()
    }

    fn to_folder(&self, idx: usize) -> Folder {
        let node = &self.nodes[idx];
        Folder {
            id: node.id.clone(),
            name: node.name.clone(),
            file_count: node.file_count,
            is_expanded: node.is_expanded,
            files: node.files.clone(),
            folders: node.children.iter().map(|&c| self.to_folder(c)).collect(),
        }
    }

    #[must_use]
    pub fn folder(&self, id: &str) -> Option<&FolderNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Parent of the given folder, `None` for top-level or unknown folders.
    #[must_use]
    pub fn parent(&self, id: &str) -> Option<&FolderNode> {
        let idx = *self.index.get(id)?;
        self.nodes[idx].parent.map(|p| &self.nodes[p])
    }

    /// Subfolders of the given folder in order.
    pub fn children(&self, id: &str) -> impl Iterator<Item = &FolderNode> {
        self.index
            .get(id)
            .into_iter()
            .flat_map(|&idx| self.nodes[idx].children.iter())
            .map(|&c| &self.nodes[c])
    }

    /// Flip a folder's expansion flag and return the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool, KnowledgeError> {
        let node = self.node_mut(id)?;
        node.is_expanded = !node.is_expanded;
        Ok(node.is_expanded)
    }

    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> Result<(), KnowledgeError> {
        self.node_mut(id)?.is_expanded = expanded;
        Ok(())
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut FolderNode, KnowledgeError> {
        let idx = *self
            .index
            .get(id)
            .ok_or_else(|| KnowledgeError::UnknownFolder(id.to_string()))?;
        Ok(&mut self.nodes[idx])
    }

    /// Visible rows in render order.
    ///
    /// A folder's files precede its subfolders; nothing below a collapsed
    /// folder is emitted.
    #[must_use]
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for (position, &idx) in self.roots.iter().enumerate() {
            self.push_rows(idx, 0, position > 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, idx: usize, depth: usize, separated: bool, rows: &mut Vec<TreeRow>) {
        let node = &self.nodes[idx];
        rows.push(TreeRow::Folder {
            folder: FolderRow {
                id: node.id.clone(),
                name: node.name.clone(),
                file_count: node.file_count,
                is_expanded: node.is_expanded,
            },
            depth,
            separated,
        });

        if !node.is_expanded {
            return;
        }
        for file in &node.files {
            rows.push(TreeRow::File {
                file: file.clone(),
                folder_id: node.id.clone(),
                depth: depth + 1,
            });
        }
        for &child in &node.children {
            self.push_rows(child, depth + 1, false, rows);
        }
    }

    #[must_use]
    pub fn totals(&self) -> TreeTotals {
        self.nodes.iter().fold(TreeTotals::default(), |acc, node| TreeTotals {
            folders: acc.folders + 1,
            files: acc.files + node.file_count,
            chunks: acc.chunks + node.files.iter().map(|f| u64::from(f.chunks)).sum::<u64>(),
        })
    }

    /// Folders whose known files disagree with their displayed count.
    #[must_use]
    pub fn count_mismatches(&self) -> Vec<&FolderNode> {
        self.nodes
            .iter()
            .filter(|node| !node.is_count_consistent())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentStatus, FileType};

    fn file(id: &str, chunks: u32) -> DocumentFile {
        DocumentFile {
            id: id.to_string(),
            filename: format!("{id}.pdf"),
            file_type: FileType::Pdf,
            size: "1.0 MB".to_string(),
            chunks,
            status: DocumentStatus::Ready,
        }
    }

    fn folder(id: &str, expanded: bool, files: Vec<DocumentFile>) -> Folder {
        Folder {
            id: id.to_string(),
            name: id.to_uppercase(),
            file_count: files.len(),
            is_expanded: expanded,
            files,
            folders: vec![],
        }
    }

    fn file_ids(rows: &[TreeRow]) -> Vec<&str> {
        rows.iter()
            .filter_map(|row| match row {
                TreeRow::File { file, .. } => Some(file.id.as_str()),
                TreeRow::Folder { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_collapsed_folder_hides_files() {
        let tree = KnowledgeTree::from_folders(vec![
            folder("a", true, vec![file("a1", 1), file("a2", 2)]),
            folder("b", false, vec![file("b1", 3)]),
        ])
        .unwrap();

        let rows = tree.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(file_ids(&rows), vec!["a1", "a2"]);
    }

    #[test]
    fn test_unloaded_folder_renders_header_only() {
        let tree = KnowledgeTree::from_folders(vec![Folder {
            id: "docs".into(),
            name: "Docs".into(),
            file_count: 1,
            is_expanded: false,
            files: vec![],
            folders: vec![],
        }])
        .unwrap();

        let rows = tree.rows();
        assert_eq!(rows.len(), 1);
        match &rows[0] {
            TreeRow::Folder {
                folder, separated, ..
            } => {
                assert_eq!(folder.file_count, 1);
                assert!(!folder.is_expanded);
                assert!(!separated);
            }
            TreeRow::File { .. } => panic!("expected folder row"),
        }
        assert!(tree.count_mismatches().is_empty());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut tree =
            KnowledgeTree::from_folders(vec![folder("a", false, vec![file("a1", 1)])]).unwrap();

        assert!(tree.toggle("a").unwrap());
        assert_eq!(file_ids(&tree.rows()), vec!["a1"]);
        assert!(!tree.toggle("a").unwrap());
        assert!(file_ids(&tree.rows()).is_empty());

        assert_eq!(
            tree.toggle("missing"),
            Err(KnowledgeError::UnknownFolder("missing".into()))
        );
    }

    #[test]
    fn test_nested_rows_respect_ancestors() {
        let mut inner = folder("inner", true, vec![file("i1", 5)]);
        inner.folders.push(folder("deep", true, vec![file("d1", 1)]));
        let mut outer = folder("outer", true, vec![file("o1", 2)]);
        outer.folders.push(inner);

        let mut tree = KnowledgeTree::from_folders(vec![outer]).unwrap();
        let rows = tree.rows();
        assert_eq!(file_ids(&rows), vec!["o1", "i1", "d1"]);
        let depths: Vec<_> = rows.iter().map(TreeRow::depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 2, 2, 3]);

        tree.set_expanded("outer", false).unwrap();
        assert_eq!(tree.rows().len(), 1);

        assert_eq!(tree.parent("deep").unwrap().id, "inner");
        assert!(tree.parent("outer").is_none());
        let children: Vec<_> = tree.children("outer").map(|n| n.id.as_str()).collect();
        assert_eq!(children, vec!["inner"]);
    }

    #[test]
    fn test_separator_flags_top_level_only() {
        let mut first = folder("a", true, vec![]);
        first.folders.push(folder("a-sub", false, vec![]));
        let tree = KnowledgeTree::from_folders(vec![first, folder("b", false, vec![])]).unwrap();

        let flags: Vec<_> = tree
            .rows()
            .iter()
            .filter_map(|row| match row {
                TreeRow::Folder {
                    folder, separated, ..
                } => Some((folder.id.clone(), *separated)),
                TreeRow::File { .. } => None,
            })
            .collect();
        assert_eq!(
            flags,
            vec![
                ("a".to_string(), false),
                ("a-sub".to_string(), false),
                ("b".to_string(), true)
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = KnowledgeTree::from_folders(vec![
            folder("a", true, vec![]),
            folder("a", true, vec![]),
        ])
        .unwrap_err();
        assert_eq!(err, KnowledgeError::DuplicateFolder("a".into()));

        let err = KnowledgeTree::from_folders(vec![
            folder("a", true, vec![file("x", 1)]),
            folder("b", true, vec![file("x", 1)]),
        ])
        .unwrap_err();
        assert_eq!(err, KnowledgeError::DuplicateFile("x".into()));
    }

    #[test]
    fn test_totals_and_mismatches() {
        let mut partial = folder("p", false, vec![]);
        partial.file_count = 1;
        let mut wrong = folder("w", true, vec![file("w1", 4)]);
        wrong.file_count = 3;

        let tree = KnowledgeTree::from_folders(vec![
            folder("a", true, vec![file("a1", 10), file("a2", 20)]),
            partial,
            wrong,
        ])
        .unwrap();

        assert_eq!(
            tree.totals(),
            TreeTotals {
                folders: 3,
                files: 6,
                chunks: 34
            }
        );
        let mismatched: Vec<_> = tree.count_mismatches().iter().map(|n| n.id.clone()).collect();
        assert_eq!(mismatched, vec!["w".to_string()]);
    }

    #[test]
    fn test_to_folders_preserves_shape() {
        let mut outer = folder("outer", false, vec![file("o1", 2)]);
        outer.folders.push(folder("inner", true, vec![file("i1", 1)]));
        let input = vec![outer, folder("second", true, vec![])];

        let tree = KnowledgeTree::from_folders(input.clone()).unwrap();
        assert_eq!(tree.to_folders(), input);
    }
}
