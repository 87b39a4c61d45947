use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const UPLOAD_SUCCEEDED: &str = "File uploaded to IPFS successfully!";
pub const UPLOAD_FAILED: &str = "File upload failed.";
pub const NO_FILE_UPLOADED: &str = "No file uploaded.";
pub const UNSUPPORTED_FILE_TYPE: &str = "File type not supported!";
pub const INVALID_UPLOAD: &str = "Invalid upload request.";

/// A file received from the form, held in memory for the length of one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Lower-cased extension including the leading dot, or an empty string.
    /// Dotfiles such as `.env` have no extension.
    pub fn extension(&self) -> String {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_lowercase()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// JSON body returned by `POST /upload`, for both outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipfs_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<UploadMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResult {
    pub fn pinned(content_id: impl Into<String>, metadata: UploadMetadata) -> Self {
        Self {
            success: true,
            message: UPLOAD_SUCCEEDED.to_string(),
            ipfs_hash: Some(content_id.into()),
            metadata: Some(metadata),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ipfs_hash: None,
            metadata: None,
            error: Some(error.into()),
        }
    }
}
