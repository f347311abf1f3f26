//! Thread-safe workspace store.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use super::{Profile, Workspace, WorkspaceError, sample_workspace};
use crate::knowledge::{KnowledgeError, KnowledgeTree};
use crate::model::{ChatSession, Conversation, active_session_index};

/// Shared handle to the loaded workspace.
///
/// Sessions and transcripts are immutable once loaded; the folder tree is
/// behind a lock because expansion flags change on toggle.
#[derive(Debug, Clone)]
pub struct WorkspaceStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    profile: Profile,
    sessions: Vec<ChatSession>,
    conversations: Vec<Conversation>,
    tree: RwLock<KnowledgeTree>,
}

impl WorkspaceStore {
    /// Validate a workspace and wrap it in a store.
    pub fn new(workspace: Workspace) -> Result<Self, WorkspaceError> {
        let Workspace {
            profile,
            sessions,
            conversations,
            folders,
        } = workspace;

        let tree = KnowledgeTree::from_folders(folders)?;

        for node in tree.count_mismatches() {
            warn!(
                name: "workspace.folder_count_mismatch",
                folder = %node.id,
                file_count = node.file_count,
                known_files = node.files.len(),
                "Folder count disagrees with its files"
            );
        }

        let flagged = sessions.iter().filter(|s| s.is_active).count();
        if flagged > 1 {
            warn!(
                name: "workspace.multiple_active_sessions",
                flagged,
                "Several sessions flagged active; the first one wins"
            );
        }

        let totals = tree.totals();
        info!(
            name: "workspace.loaded",
            sessions = sessions.len(),
            folders = totals.folders,
            files = totals.files,
            chunks = totals.chunks,
            "Workspace loaded"
        );

        Ok(Self {
            inner: Arc::new(StoreInner {
                profile,
                sessions,
                conversations,
                tree: RwLock::new(tree),
            }),
        })
    }

    /// Store over the built-in sample workspace.
    pub fn sample() -> Result<Self, WorkspaceError> {
        Self::new(sample_workspace())
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.inner.profile
    }

    #[must_use]
    pub fn sessions(&self) -> &[ChatSession] {
        &self.inner.sessions
    }

    #[must_use]
    pub fn session(&self, id: &str) -> Option<&ChatSession> {
        self.inner.sessions.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn active_session(&self) -> Option<&ChatSession> {
        active_session_index(&self.inner.sessions).map(|idx| &self.inner.sessions[idx])
    }

    /// Transcript of a session, if one was loaded.
    #[must_use]
    pub fn conversation(&self, session_id: &str) -> Option<&Conversation> {
        self.inner
            .conversations
            .iter()
            .find(|c| c.session_id == session_id)
    }

    /// Snapshot of the folder tree.
    #[must_use]
    pub fn tree(&self) -> KnowledgeTree {
        self.inner
            .tree
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Flip a folder's expansion flag and return the new value.
    pub fn toggle_folder(&self, id: &str) -> Result<bool, KnowledgeError> {
        let mut tree = self
            .inner
            .tree
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let expanded = tree.toggle(id)?;
        info!(
            name: "knowledge.folder_toggled",
            folder = %id,
            expanded,
            "Folder toggled"
        );
        Ok(expanded)
    }

    /// Current state as a serializable workspace.
    #[must_use]
    pub fn snapshot(&self) -> Workspace {
        Workspace {
            profile: self.inner.profile.clone(),
            sessions: self.inner.sessions.clone(),
            conversations: self.inner.conversations.clone(),
            folders: self.tree().to_folders(),
        }
    }
}
