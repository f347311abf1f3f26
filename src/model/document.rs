//! Knowledge-base documents and folders.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Supported document file types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Pdf,
    Md,
    Txt,
}

impl FileType {
    /// Badge label, identical to the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Md => "MD",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing status for an uploaded document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentStatus {
    Ready,
    Processing,
    #[default]
    Pending,
    Failed,
}

impl DocumentStatus {
    /// Pill label, identical to the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Processing => "PROCESSING",
            Self::Pending => "PENDING",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single file in the knowledge base, owned by exactly one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    pub id: String,
    pub filename: String,
    pub file_type: FileType,
    /// Human-readable size, e.g. "2.4 MB".
    pub size: String,
    /// Number of retrieval chunks produced for this file.
    #[serde(default)]
    pub chunks: u32,
    #[serde(default)]
    pub status: DocumentStatus,
}

/// A folder grouping files, optionally containing subfolders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// Displayed count. May exceed `files.len()` while files are not loaded.
    pub file_count: usize,
    #[serde(default)]
    pub is_expanded: bool,
    #[serde(default)]
    pub files: Vec<DocumentFile>,
    /// Nested subfolders, rendered after this folder's own files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<Folder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_serialize_uppercase() {
        assert_eq!(serde_json::to_string(&FileType::Md).unwrap(), "\"MD\"");
        assert_eq!(
            serde_json::to_string(&DocumentStatus::Processing).unwrap(),
            "\"PROCESSING\""
        );
        let status: DocumentStatus = serde_json::from_str("\"FAILED\"").unwrap();
        assert_eq!(status, DocumentStatus::Failed);
        assert_eq!(status.to_string(), "FAILED");
    }

    #[test]
    fn test_folder_camel_case_defaults() {
        let folder: Folder =
            serde_json::from_str(r#"{"id":"f3","name":"Project Docs","fileCount":1}"#).unwrap();
        assert!(!folder.is_expanded);
        assert!(folder.files.is_empty());
        assert!(folder.folders.is_empty());

        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(json["fileCount"], 1);
        assert_eq!(json["isExpanded"], false);
        assert!(json.get("folders").is_none());
    }
}
