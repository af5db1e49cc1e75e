use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::storage::StorageError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Every way a request can fail. The display string is the exact body sent
/// back to the client.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Paste empty")]
    EmptyPaste,
    #[error("Paste too large")]
    PasteTooLarge,
    #[error("Paste must be text/plain")]
    UnsupportedContentType,
    #[error("HTML content not allowed")]
    HtmlNotAllowed,
    #[error("Could not read paste")]
    UnreadableBody { source: BytesRejection },
    #[error("Invalid slug format")]
    InvalidSlugFormat,
    #[error("Paste not found")]
    NotFound,
    #[error("Could not insert paste")]
    InsertFailed { source: StorageError },
    #[error("Internal configuration error")]
    Configuration,
    #[error("Could not connect to database server")]
    Connection { source: StorageError },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmptyPaste => StatusCode::BAD_REQUEST,
            ApiError::PasteTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedContentType => StatusCode::BAD_REQUEST,
            ApiError::HtmlNotAllowed => StatusCode::BAD_REQUEST,
            ApiError::UnreadableBody { .. } => StatusCode::BAD_REQUEST,
            // kept as a server error for compatibility with existing clients
            ApiError::InvalidSlugFormat => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InsertFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Connection { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Emit the error event for this failure.
    pub fn log(&self) {
        let status_code = self.status_code();
        match std::error::Error::source(self) {
            Some(source) => error!(status = %status_code, "API error: {self}: {source}"),
            None => error!(status = %status_code, "API error: {self}"),
        }
    }

    /// Log the error and hand it back, for callers that surface it themselves.
    pub fn reported(self) -> Self {
        self.log();
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), format!("{self}")).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(source: StorageError) -> Self {
        match source {
            StorageError::MissingConfig => ApiError::Configuration,
            StorageError::Connection { .. } => ApiError::Connection { source },
            StorageError::Write { .. } => ApiError::InsertFailed { source },
            // read failures are reported the same way as a missing paste
            StorageError::Read { .. } => ApiError::NotFound,
        }
    }
}
