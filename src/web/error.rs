use crate::models::{
    RelayResult, INVALID_UPLOAD, NO_FILE_UPLOADED, UNSUPPORTED_FILE_TYPE, UPLOAD_FAILED,
};
use crate::services::relay::RelayError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingFile
            | RelayError::UnsupportedFileType { .. }
            | RelayError::Multipart(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RelayError::MissingFile => NO_FILE_UPLOADED,
            RelayError::UnsupportedFileType { .. } => UNSUPPORTED_FILE_TYPE,
            RelayError::Multipart(_) => INVALID_UPLOAD,
            RelayError::Upstream(_) => UPLOAD_FAILED,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Upload relay failed: {:?}", self);
        } else {
            tracing::info!("Upload rejected: {}", self);
        }
        let body = RelayResult::failed(self.message(), self.to_string());
        (status, Json(body)).into_response()
    }
}

/// Errors from the HTML side of the relay.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Application error: {:?}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
