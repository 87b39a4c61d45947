use super::progress::UploadProgress;
use super::transport::{ClientError, FormSubmission, RelayClient};
use crate::models::{RelayResult, UploadedFile, UPLOAD_FAILED};
use bytes::Bytes;
use std::path::Path;
use tokio::sync::watch;

pub const SELECT_FILE_PROMPT: &str = "Please select a file to upload.";

/// How one submit attempt ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// No file selected; nothing was sent.
    Blocked,
    Uploaded(RelayResult),
    Failed(ClientError),
}

/// State of the upload form: idle until submitted, uploading until the relay
/// answers, then idle again.
#[derive(Debug, Default)]
pub struct UploadForm {
    file: Option<UploadedFile>,
    title: String,
    description: String,
    message: String,
    progress: UploadProgress,
    uploading: bool,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, file: Option<UploadedFile>) {
        self.file = file;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn progress(&self) -> u8 {
        self.progress.percentage()
    }

    pub fn subscribe_progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Send the form to the relay.
    ///
    /// On success the fields are cleared and the relay's message shown; on
    /// failure the fields stay so the user can try again. Progress and the
    /// uploading flag are reset either way.
    pub async fn submit(&mut self, client: &RelayClient) -> SubmitOutcome {
        let Some(file) = self.file.clone() else {
            self.message = SELECT_FILE_PROMPT.to_string();
            return SubmitOutcome::Blocked;
        };

        let submission = FormSubmission {
            file,
            title: self.title.clone(),
            description: self.description.clone(),
        };

        self.uploading = true;
        self.progress.reset();

        let outcome = match client.upload(submission, &self.progress).await {
            Ok(result) => {
                self.message = result.message.clone();
                self.file = None;
                self.title.clear();
                self.description.clear();
                SubmitOutcome::Uploaded(result)
            }
            Err(err) => {
                tracing::warn!(endpoint = %client.endpoint(), "Error uploading the file: {}", err);
                self.message = UPLOAD_FAILED.to_string();
                SubmitOutcome::Failed(err)
            }
        };

        self.progress.reset();
        self.uploading = false;
        outcome
    }
}

/// Read a local file into an [`UploadedFile`], guessing its MIME type from
/// the extension.
pub async fn load_file(path: &Path) -> std::io::Result<UploadedFile> {
    let data = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Ok(UploadedFile::new(file_name, content_type, Bytes::from(data)))
}
