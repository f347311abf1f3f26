//! Workspace dataset and its shared store.
//!
//! A [`Workspace`] is the whole dataset rendered by the views: branding,
//! chat sessions with their transcripts, and the knowledge-base folders.
//! It comes either from [`sample_workspace`] or from a YAML seed file with
//! the same camelCase shape.
//!
//! # Example
//!
//! ```rust
//! use docmind::workspace::{WorkspaceStore, sample_workspace};
//!
//! let store = WorkspaceStore::new(sample_workspace()).unwrap();
//! assert_eq!(store.sessions().len(), 5);
//! assert!(store.toggle_folder("f3").unwrap());
//! ```

mod sample;
mod store;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeError;
use crate::model::{ChatSession, Conversation, Folder};

pub use sample::sample_workspace;
pub use store::WorkspaceStore;

/// Branding shown in the navbar and avatars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub product_name: String,
    pub user_initials: String,
    pub model_label: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            product_name: "DocMind".to_string(),
            user_initials: "JD".to_string(),
            model_label: "gemini-2.5-flash".to_string(),
        }
    }
}

impl Profile {
    /// Single-letter mark used for the logo and assistant avatar.
    #[must_use]
    pub fn product_initial(&self) -> String {
        self.product_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// The complete dataset behind the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Workspace {
    pub profile: Profile,
    pub sessions: Vec<ChatSession>,
    pub conversations: Vec<Conversation>,
    pub folders: Vec<Folder>,
}

/// Errors raised while loading a workspace.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("failed to read workspace seed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid workspace seed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid knowledge base: {0}")]
    Knowledge(#[from] KnowledgeError),
}

impl Workspace {
    pub fn from_yaml_str(content: &str) -> Result<Self, WorkspaceError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read a YAML seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorkspaceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| WorkspaceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentStatus, FileType};

    #[test]
    fn test_yaml_seed_defaults() {
        let yaml = r#"
sessions:
  - id: "a"
    title: "Consensus"
    timestamp: "Today"
    isActive: true
folders:
  - id: "f1"
    name: "Papers"
    fileCount: 1
    isExpanded: true
    files:
      - id: "d1"
        filename: "paxos.pdf"
        fileType: PDF
        size: "1 MB"
        chunks: 9
        status: FAILED
    folders:
      - id: "f1a"
        name: "Drafts"
        fileCount: 0
"#;
        let workspace = Workspace::from_yaml_str(yaml).unwrap();
        assert_eq!(workspace.profile, Profile::default());
        assert!(workspace.conversations.is_empty());
        assert_eq!(workspace.sessions[0].title, "Consensus");

        let folder = &workspace.folders[0];
        assert_eq!(folder.files[0].file_type, FileType::Pdf);
        assert_eq!(folder.files[0].status, DocumentStatus::Failed);
        assert_eq!(folder.folders[0].name, "Drafts");
        assert!(!folder.folders[0].is_expanded);
    }

    #[test]
    fn test_bad_seed_reports_yaml_error() {
        let err = Workspace::from_yaml_str("folders: [{ id: 1 }]").unwrap_err();
        assert!(matches!(err, WorkspaceError::Yaml(_)));
    }

    #[test]
    fn test_missing_seed_reports_path() {
        let err = Workspace::load("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_product_initial() {
        let mut profile = Profile::default();
        assert_eq!(profile.product_initial(), "D");
        profile.product_name = "notes".into();
        assert_eq!(profile.product_initial(), "N");
        profile.product_name.clear();
        assert_eq!(profile.product_initial(), "");
    }
}
