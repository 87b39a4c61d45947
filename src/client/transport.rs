use super::progress::UploadProgress;
use crate::models::{RelayResult, UploadedFile};
use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, StatusCode};
use thiserror::Error;

const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Relay responded with status {}: {message}", .status.as_u16())]
    Status { status: StatusCode, message: String },
}

/// What the form hands to the transport on submit.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub file: UploadedFile,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(concat!("pinrelay-upload/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the submission as multipart form data. `progress` advances as the
    /// file body is handed to the connection.
    pub async fn upload(
        &self,
        submission: FormSubmission,
        progress: &UploadProgress,
    ) -> Result<RelayResult, ClientError> {
        let FormSubmission {
            file,
            title,
            description,
        } = submission;

        let length = file.size() as u64;
        let body = Body::wrap_stream(progress_stream(file.data, progress.clone()));
        let part = Part::stream_with_length(body, length)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;

        let form = Form::new()
            .part("file", part)
            .text("title", title)
            .text("description", description);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<RelayResult>().await {
                Ok(result) => result.error.unwrap_or(result.message),
                Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
            };
            return Err(ClientError::Status { status, message });
        }

        Ok(response.json::<RelayResult>().await?)
    }
}

/// Split `data` into chunks, reporting the running byte count as each one is
/// pulled by the transport.
fn progress_stream(
    data: Bytes,
    progress: UploadProgress,
) -> impl Stream<Item = Result<Bytes, std::io::Error>> + Send + Sync + 'static {
    let total = data.len() as u64;
    let chunks: Vec<Bytes> = (0..data.len())
        .step_by(CHUNK_SIZE)
        .map(|start| data.slice(start..(start + CHUNK_SIZE).min(data.len())))
        .collect();

    let mut sent = 0u64;
    stream::iter(chunks).map(move |chunk| {
        sent += chunk.len() as u64;
        progress.record(sent, total);
        Ok(chunk)
    })
}
