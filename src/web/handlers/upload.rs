use crate::models::{RelayResult, UploadedFile};
use crate::services::relay::{self, RelayError, RelayUpload};
use crate::web::state::AppState;
use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::Json;
use std::sync::Arc;

/// POST /upload
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<RelayResult>, RelayError> {
    let upload = match multipart {
        Ok(multipart) => read_upload(multipart).await?,
        // No multipart body at all carries no file part.
        Err(MultipartRejection::InvalidBoundary(rejection)) => {
            tracing::debug!(reason = %rejection.body_text(), "Upload request is not multipart");
            RelayUpload::default()
        }
        Err(rejection) => return Err(RelayError::Multipart(rejection.body_text())),
    };
    let result = relay::relay_upload(&state.pinning, upload).await?;
    Ok(Json(result))
}

fn multipart_error(err: MultipartError) -> RelayError {
    RelayError::Multipart(err.body_text())
}

/// Collect the `file`, `title` and `description` parts. Other parts are
/// ignored; a second file part is refused.
async fn read_upload(mut multipart: Multipart) -> Result<RelayUpload, RelayError> {
    let mut upload = RelayUpload::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        let file_name = field.file_name().map(str::to_owned);

        match (name.as_deref(), file_name) {
            (Some("file"), Some(file_name)) => {
                if upload.file.is_some() {
                    return Err(RelayError::Multipart(
                        "Only one 'file' part is accepted".to_string(),
                    ));
                }
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(multipart_error)?;

                // Browsers send an empty, unnamed part when no file was picked.
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }
                upload.file = Some(UploadedFile::new(file_name, content_type, data));
            }
            (Some("title"), None) => {
                upload.metadata.title = Some(field.text().await.map_err(multipart_error)?);
            }
            (Some("description"), None) => {
                upload.metadata.description = Some(field.text().await.map_err(multipart_error)?);
            }
            (other, _) => {
                tracing::debug!(field = ?other, "Ignoring multipart field");
            }
        }
    }

    Ok(upload)
}
