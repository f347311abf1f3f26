//! Built-in sample workspace used when no seed file is configured.

use crate::model::{
    ChatMessage, ChatSession, Conversation, DocumentFile, DocumentStatus, FileType, Folder,
    MessageRole, RetrievalMeta, Source,
};

use super::{Profile, Workspace};

fn file(
    id: &str,
    filename: &str,
    file_type: FileType,
    size: &str,
    chunks: u32,
    status: DocumentStatus,
) -> DocumentFile {
    DocumentFile {
        id: id.to_string(),
        filename: filename.to_string(),
        file_type,
        size: size.to_string(),
        chunks,
        status,
    }
}

fn session(id: &str, title: &str, timestamp: &str, is_active: bool) -> ChatSession {
    ChatSession {
        id: id.to_string(),
        title: title.to_string(),
        timestamp: timestamp.to_string(),
        is_active,
    }
}

fn folders() -> Vec<Folder> {
    use DocumentStatus::{Processing, Ready};
    use FileType::{Md, Pdf, Txt};

    vec![
        Folder {
            id: "f1".into(),
            name: "Distributed Systems".into(),
            file_count: 4,
            is_expanded: true,
            files: vec![
                file("d1", "CS6650_Lecture11_2PC.pdf", Pdf, "2.4 MB", 42, Ready),
                file("d2", "CS6650_Lecture12_3PC.pdf", Pdf, "2.1 MB", 38, Ready),
                file("d3", "Raft_Consensus.pdf", Pdf, "1.2 MB", 51, Ready),
                file("d4", "distributed_systems_notes.md", Md, "89 KB", 24, Ready),
            ],
            folders: vec![],
        },
        Folder {
            id: "f2".into(),
            name: "AI / Machine Learning".into(),
            file_count: 3,
            is_expanded: true,
            files: vec![
                file("d5", "CS7180_RAG_Survey.pdf", Pdf, "3.1 MB", 93, Ready),
                file("d6", "Attention_Is_All_You_Need.pdf", Pdf, "1.8 MB", 67, Ready),
                file("d7", "ml_study_notes.txt", Txt, "34 KB", 12, Processing),
            ],
            folders: vec![],
        },
        Folder {
            id: "f3".into(),
            name: "Project Docs".into(),
            file_count: 1,
            is_expanded: false,
            files: vec![],
            folders: vec![],
        },
    ]
}

fn conversation() -> Conversation {
    let answer = "Two-Phase Commit (2PC) is a distributed protocol that ensures all nodes \
either commit or abort a transaction together. From your Lecture 11 slides:

Phase 1: the coordinator sends PREPARE and each participant votes YES or NO.

Phase 2: if all voted YES, broadcast COMMIT; otherwise ABORT.

The key trade-off: 2PC guarantees atomicity but can block if the coordinator \
fails mid-protocol.";

    Conversation {
        session_id: "1".into(),
        subtitle: Some("Based on your distributed systems notes".into()),
        messages: vec![
            ChatMessage {
                id: "m1".into(),
                role: MessageRole::User,
                content: "What is Two-Phase Commit?".into(),
                sources: None,
                retrieval_meta: None,
            },
            ChatMessage {
                id: "m2".into(),
                role: MessageRole::Assistant,
                content: answer.into(),
                sources: Some(vec![
                    Source {
                        id: "s1".into(),
                        filename: "CS6650_Lecture11_2PC.pdf".into(),
                        file_type: FileType::Pdf,
                        location: "slides 28-35".into(),
                    },
                    Source {
                        id: "s2".into(),
                        filename: "distributed_systems_notes.md".into(),
                        file_type: FileType::Md,
                        location: "chunk 5".into(),
                    },
                ]),
                retrieval_meta: Some(RetrievalMeta {
                    tool_name: "Knowledge Base".into(),
                    document_count: 2,
                    latency: "1.2s".into(),
                }),
            },
        ],
    }
}

/// The research workspace shown on first launch.
#[must_use]
pub fn sample_workspace() -> Workspace {
    Workspace {
        profile: Profile::default(),
        sessions: vec![
            session("1", "What is 2PC?", "Just now", true),
            session("2", "Paxos vs Raft comparison", "Yesterday", false),
            session("3", "RAG chunking strategies", "Feb 22", false),
            session("4", "LangGraph agent design", "Feb 20", false),
            session("5", "BM25 hybrid search", "Feb 18", false),
        ],
        conversations: vec![conversation()],
        folders: folders(),
    }
}
