use crate::config::PinningConfig;
use crate::models::{PinMetadata, PinResponse, UploadedFile};
use mime_guess::mime::Mime;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PinError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Request failed with status code {}", .status.as_u16())]
    Status { status: StatusCode, body: String },
    #[error("Unexpected pinning service response: {0}")]
    Decode(String),
    #[error("Invalid pin metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Client for the pinning API's pin-file endpoint. Cheap to clone; clones
/// share one connection pool.
#[derive(Clone)]
pub struct PinningClient {
    http: Client,
    endpoint: String,
    jwt: String,
}

impl std::fmt::Debug for PinningClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinningClient")
            .field("endpoint", &self.endpoint)
            .field("jwt", &"<redacted>")
            .finish()
    }
}

impl PinningClient {
    pub fn new(config: &PinningConfig) -> anyhow::Result<Self> {
        let jwt = config.require_jwt()?.to_string();

        let mut builder =
            Client::builder().user_agent(concat!("pin-relay/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint.clone(),
            jwt,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Pin one file. The body is streamed with a known length and no size cap.
    pub async fn pin_file(
        &self,
        file: UploadedFile,
        metadata: Option<&PinMetadata>,
    ) -> Result<PinResponse, PinError> {
        let form = build_form(file, metadata)?;

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.jwt)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!(error = %err, "Could not read pinning error body");
                    String::new()
                }
            };
            tracing::warn!(%status, body = %body, "Pinning service rejected upload");
            return Err(PinError::Status { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str::<PinResponse>(&body).map_err(|e| PinError::Decode(e.to_string()))
    }
}

fn build_form(file: UploadedFile, metadata: Option<&PinMetadata>) -> Result<Form, PinError> {
    let mime = file
        .content_type
        .parse::<Mime>()
        .unwrap_or_else(|_| mime_guess::from_path(&file.file_name).first_or_octet_stream());
    let length = file.size() as u64;

    let part = Part::stream_with_length(Body::from(file.data), length)
        .file_name(file.file_name)
        .mime_str(mime.as_ref())?;

    let mut form = Form::new().part("file", part);
    if let Some(metadata) = metadata {
        form = form.text("pinataMetadata", serde_json::to_string(metadata)?);
    }
    Ok(form)
}
