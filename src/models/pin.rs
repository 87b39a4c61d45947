use super::UploadMetadata;
use serde::{Deserialize, Serialize};

/// Sent to the pinning API as the `pinataMetadata` form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMetadata {
    pub name: String,
    pub description: String,
}

impl PinMetadata {
    /// Metadata is only attached when the form carried a non-empty title.
    pub fn from_upload(metadata: &UploadMetadata) -> Option<Self> {
        let title = metadata.title.as_deref().filter(|t| !t.is_empty())?;
        Some(Self {
            name: title.to_string(),
            description: metadata.description.clone().unwrap_or_default(),
        })
    }
}

/// Response body of a successful pin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinResponse {
    pub ipfs_hash: String,
    #[serde(default)]
    pub pin_size: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, rename = "isDuplicate")]
    pub is_duplicate: Option<bool>,
}
