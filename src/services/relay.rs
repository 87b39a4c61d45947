use crate::models::{PinMetadata, RelayResult, UploadMetadata, UploadedFile};
use crate::services::file_type;
use crate::services::pinning::{PinError, PinningClient};
use thiserror::Error;

/// One parsed `POST /upload` submission.
#[derive(Debug, Clone, Default)]
pub struct RelayUpload {
    pub file: Option<UploadedFile>,
    pub metadata: UploadMetadata,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("No file part named 'file' in the request")]
    MissingFile,
    #[error("Error: File type not supported! ({file_name}, {mime_type})")]
    UnsupportedFileType { file_name: String, mime_type: String },
    #[error("Invalid multipart body: {0}")]
    Multipart(String),
    #[error(transparent)]
    Upstream(#[from] PinError),
}

/// Validate the upload and forward it to the pinning service.
///
/// Nothing leaves the process unless a file is present and passes the
/// allow-list. Upstream failures are returned as-is; there is no retry.
pub async fn relay_upload(
    client: &PinningClient,
    upload: RelayUpload,
) -> Result<RelayResult, RelayError> {
    let file = upload.file.ok_or(RelayError::MissingFile)?;

    if !file_type::check_upload(&file).is_allowed() {
        tracing::warn!(
            file_name = %file.file_name,
            mime_type = %file.content_type,
            "Rejected upload with unsupported file type"
        );
        return Err(RelayError::UnsupportedFileType {
            file_name: file.file_name,
            mime_type: file.content_type,
        });
    }

    let pin_metadata = PinMetadata::from_upload(&upload.metadata);
    let file_name = file.file_name.clone();
    tracing::info!(
        file_name = %file_name,
        size = file.size(),
        with_metadata = pin_metadata.is_some(),
        "Forwarding upload to pinning service"
    );

    let pinned = client.pin_file(file, pin_metadata.as_ref()).await?;

    tracing::info!(
        file_name = %file_name,
        ipfs_hash = %pinned.ipfs_hash,
        duplicate = pinned.is_duplicate.unwrap_or(false),
        "File pinned"
    );

    Ok(RelayResult::pinned(pinned.ipfs_hash, upload.metadata))
}
