//! Canonical data shapes shared by the views, the store and the JSON API.
//!
//! All shapes serialize as camelCase so seed files and API payloads read
//! the same as the browser-side types they replace.
//!
//! - [`document`]: knowledge-base folders and files
//! - [`chat`]: sessions, messages and citations

pub mod chat;
pub mod document;

pub use chat::{
    ChatMessage, ChatSession, Conversation, MessageRole, RetrievalMeta, Source,
    active_session_index,
};
pub use document::{DocumentFile, DocumentStatus, FileType, Folder};
