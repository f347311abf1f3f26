//! Chat sessions, messages and source citations.

use serde::{Deserialize, Serialize};

use super::document::FileType;

/// Chat session shown in the session sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    /// Human-readable timestamp, e.g. "Just now" or "Feb 22".
    pub timestamp: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Index of the session that renders as active.
///
/// The first flagged session wins; with none flagged there is no active
/// session.
#[must_use]
pub fn active_session_index(sessions: &[ChatSession]) -> Option<usize> {
    sessions.iter().position(|s| s.is_active)
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A citation backing part of an assistant answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub filename: String,
    pub file_type: FileType,
    /// Where in the document, e.g. "slides 28-35" or "chunk 5".
    pub location: String,
}

/// How an assistant answer was retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalMeta {
    pub tool_name: String,
    pub document_count: u32,
    /// Human-readable latency, e.g. "1.2s".
    pub latency: String,
}

impl RetrievalMeta {
    /// Summary line such as `2 docs · 1.2s`.
    #[must_use]
    pub fn summary(&self) -> String {
        let noun = if self.document_count == 1 { "doc" } else { "docs" };
        format!("{} {noun} · {}", self.document_count, self.latency)
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_meta: Option<RetrievalMeta>,
}

impl ChatMessage {
    /// Content split into paragraphs on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Citations to render. Only assistant messages carry them.
    #[must_use]
    pub fn citations(&self) -> &[Source] {
        match (self.role, &self.sources) {
            (MessageRole::Assistant, Some(sources)) => sources.as_slice(),
            _ => &[],
        }
    }

    /// Retrieval metadata to render. Only assistant messages carry it.
    #[must_use]
    pub fn retrieval(&self) -> Option<&RetrievalMeta> {
        match self.role {
            MessageRole::Assistant => self.retrieval_meta.as_ref(),
            MessageRole::User => None,
        }
    }
}

/// Transcript attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}
